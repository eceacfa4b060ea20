#[cfg(test)]
mod tests {
    use hwlog::libs::event::{classify, ActivityEvent, PointerToken};
    use rdev::{Button, EventType, Key};

    #[test]
    fn test_key_events_classify_with_key_identity() {
        assert_eq!(
            classify(&EventType::KeyPress(Key::KeyA)),
            Some(ActivityEvent::KeyDown(Key::KeyA))
        );
        assert_eq!(
            classify(&EventType::KeyRelease(Key::ShiftLeft)),
            Some(ActivityEvent::KeyUp(Key::ShiftLeft))
        );
        // Keys the platform layer could not name still carry their raw code.
        assert_eq!(
            classify(&EventType::KeyPress(Key::Unknown(0x41))),
            Some(ActivityEvent::KeyDown(Key::Unknown(0x41)))
        );
    }

    #[test]
    fn test_tracked_buttons_map_to_tokens() {
        assert_eq!(
            classify(&EventType::ButtonPress(Button::Left)),
            Some(ActivityEvent::ButtonDown(PointerToken::LeftButton))
        );
        assert_eq!(
            classify(&EventType::ButtonPress(Button::Middle)),
            Some(ActivityEvent::ButtonDown(PointerToken::MiddleButton))
        );
        assert_eq!(
            classify(&EventType::ButtonRelease(Button::Right)),
            Some(ActivityEvent::ButtonUp(PointerToken::RightButton))
        );
    }

    #[test]
    fn test_untracked_buttons_are_no_ops() {
        assert_eq!(classify(&EventType::ButtonPress(Button::Unknown(8))), None);
        assert_eq!(classify(&EventType::ButtonRelease(Button::Unknown(9))), None);
    }

    #[test]
    fn test_wheel_records_need_a_nonzero_delta() {
        assert_eq!(
            classify(&EventType::Wheel { delta_x: 0, delta_y: -3 }),
            Some(ActivityEvent::WheelTick)
        );
        assert_eq!(
            classify(&EventType::Wheel { delta_x: 1, delta_y: 0 }),
            Some(ActivityEvent::WheelTick)
        );
        // An empty scroll record carries no activity-relevant flag.
        assert_eq!(classify(&EventType::Wheel { delta_x: 0, delta_y: 0 }), None);
    }

    #[test]
    fn test_mouse_move_classifies_as_movement() {
        assert_eq!(
            classify(&EventType::MouseMove { x: 10.0, y: 20.0 }),
            Some(ActivityEvent::PointerMoved)
        );
    }
}
