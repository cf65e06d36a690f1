//! Tests for event routing.

use lightdom::{Event, MouseButton};
use lightslider::prelude::*;

fn setup(config: SliderConfig) -> (Slider, Document, LayoutResult) {
    let document = Document::new();
    let mut slider = Slider::new(document.clone(), config)
        .with_slides((0..4).map(|i| Element::li().child(Element::text(format!("{i}")))));
    slider.mount(ScrollBox::new(1200.0, 300.0));

    let mut layout = LayoutResult::new();
    layout.insert(slider.wrapper_id(), Rect::new(0, 0, 40, 10));
    layout.insert(slider.list_id(), Rect::new(2, 0, 36, 8));
    (slider, document, layout)
}

fn click(target: String) -> Event {
    Event::Click {
        target: Some(target),
        x: 0,
        y: 0,
        button: MouseButton::Left,
    }
}

fn wheel(x: u16, y: u16, delta_y: i16) -> Event {
    Event::Wheel {
        target: None,
        x,
        y,
        delta_x: 0,
        delta_y,
    }
}

fn scroll_left(slider: &Slider) -> f64 {
    slider.container().map(|c| c.scroll_left()).unwrap_or(f64::NAN)
}

#[test]
fn test_mouse_move_tracks_hover() {
    let (mut slider, document, layout) = setup(SliderConfig::new());

    let result = slider.handle_event(&Event::MouseMove { x: 5, y: 5 }, &layout);
    assert_eq!(result, EventResult::Ignored);
    assert!(slider.is_hovered());
    assert!(document.dispatch_wheel(&wheel(5, 5, 100)));

    slider.handle_event(&Event::MouseMove { x: 50, y: 5 }, &layout);
    assert!(!slider.is_hovered());
    assert!(!document.dispatch_wheel(&wheel(50, 5, 100)));
}

#[test]
fn test_wheel_over_slider_scrolls() {
    let (mut slider, _document, layout) = setup(SliderConfig::new());
    slider.handle_event(&Event::MouseMove { x: 5, y: 5 }, &layout);

    let result = slider.handle_event(&wheel(5, 5, 100), &layout);
    assert!(result.is_consumed());
    assert_eq!(scroll_left(&slider), 300.0);
}

#[test]
fn test_wheel_outside_slider_is_ignored() {
    let (mut slider, _document, layout) = setup(SliderConfig::new());
    slider.pointer_enter();

    let result = slider.handle_event(&wheel(60, 20, 100), &layout);
    assert_eq!(result, EventResult::Ignored);
    assert_eq!(scroll_left(&slider), 0.0);
}

#[test]
fn test_wheel_at_start_lets_page_scroll() {
    let (mut slider, document, layout) = setup(SliderConfig::new());
    slider.handle_event(&Event::MouseMove { x: 5, y: 5 }, &layout);

    let event = wheel(5, 5, -100);
    slider.handle_event(&event, &layout);

    assert!(!slider.is_hovered());
    assert!(!document.dispatch_wheel(&event));
}

#[test]
fn test_button_clicks() {
    let (mut slider, _document, layout) = setup(SliderConfig::new().buttons(true));

    let next = slider.next_id();
    assert!(slider.handle_event(&click(next), &layout).is_consumed());
    assert_eq!(scroll_left(&slider), 300.0);

    let prev = slider.prev_id();
    assert!(slider.handle_event(&click(prev), &layout).is_consumed());
    assert_eq!(scroll_left(&slider), 0.0);
}

#[test]
fn test_button_clicks_ignored_without_buttons() {
    let (mut slider, _document, layout) = setup(SliderConfig::new());

    let next = slider.next_id();
    assert_eq!(slider.handle_event(&click(next), &layout), EventResult::Ignored);
    assert_eq!(scroll_left(&slider), 0.0);
}

#[test]
fn test_dot_click() {
    let (mut slider, _document, layout) = setup(SliderConfig::new().dots(true));

    let dot = slider.dot_id(2);
    assert!(slider.handle_event(&click(dot), &layout).is_consumed());
    assert_eq!(scroll_left(&slider), 600.0);
    assert_eq!(slider.page(), 2);
}

#[test]
fn test_unknown_dot_is_ignored() {
    let (mut slider, _document, layout) = setup(SliderConfig::new().dots(true));

    let dot = slider.dot_id(9);
    assert_eq!(slider.handle_event(&click(dot), &layout), EventResult::Ignored);
    assert_eq!(
        slider.handle_event(&click("elsewhere".to_string()), &layout),
        EventResult::Ignored
    );
}

#[test]
fn test_scroll_event_on_list() {
    let (mut slider, _document, layout) = setup(SliderConfig::new().dots(true));
    slider.container_mut().unwrap().scroll_to(600.0);

    let event = Event::Scroll {
        target: slider.list_id(),
    };
    assert!(slider.handle_event(&event, &layout).is_consumed());
    assert_eq!(slider.page(), 2);

    let other = Event::Scroll {
        target: "page".to_string(),
    };
    assert_eq!(slider.handle_event(&other, &layout), EventResult::Ignored);
}

#[test]
fn test_resize_recomputes_pages() {
    let (mut slider, _document, layout) = setup(SliderConfig::new().dots(true));
    assert_eq!(slider.page_count(), 4);

    slider.container_mut().unwrap().set_client_width(400.0);
    slider.handle_event(
        &Event::Resize {
            width: 80,
            height: 24,
        },
        &layout,
    );
    assert_eq!(slider.page_count(), 3);
}
