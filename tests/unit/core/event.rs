use super::*;

#[test]
fn only_blur_is_captured() {
    for kind in RawEventKind::ALL {
        let capture = kind.listener_options().capture;
        assert_eq!(capture, kind == RawEventKind::Blur, "{kind:?}");
        assert_eq!(kind.bubbles(), !capture);
    }
}

#[test]
fn notification_names() {
    assert_eq!(NotificationKind::Input.as_str(), "text:input");
    assert_eq!(NotificationKind::Commit.to_string(), "text:commit");
}

#[test]
fn raw_event_builders() {
    let event = RawEvent::composition_end(1u32).with_data("日本語");
    assert_eq!(event.kind, RawEventKind::CompositionEnd);
    assert_eq!(event.target(), Some(&1));
    assert_eq!(event.data.as_deref(), Some("日本語"));
    assert!(RawEvent::<u32>::new(RawEventKind::Blur, None).target().is_none());
}
