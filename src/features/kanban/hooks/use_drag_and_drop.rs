use leptos::ev;
use leptos::prelude::*;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use crate::core::config::BoardConfig;
use crate::core::dnd::{
    ActivationConstraint, DragEndEvent, DragItem, DragKind, DragOverEvent, DragStartEvent, Point,
    PointerSensor, SensorEvent, ID_ATTR, KIND_ATTR,
};
use crate::features::kanban::services::{drag_cancel, drag_end, drag_over, drag_start, Board};

/// A primary-button press on a draggable, captured from its `pointerdown`.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerDown {
    pub item: DragItem,
    pub pointer_id: i32,
    pub position: Point,
    /// Pointer position relative to the draggable's top-left corner.
    pub grab_offset: Point,
}

impl PointerDown {
    pub fn from_event(item: DragItem, ev: &web_sys::PointerEvent) -> Option<Self> {
        if ev.button() != 0 {
            return None;
        }
        let position = pointer_position(ev);
        let grab_offset = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| el.get_bounding_client_rect())
            .map(|rect| Point::new(position.x - rect.left(), position.y - rect.top()))
            .unwrap_or_default();
        Some(Self {
            item,
            pointer_id: ev.pointer_id(),
            position,
            grab_offset,
        })
    }
}

#[derive(Clone, Copy)]
pub struct DragHook {
    /// Arms the sensor. Wire to `pointerdown` on each draggable handle.
    pub begin: Callback<PointerDown>,
    /// Top-left corner of the drag overlay while a drag is active.
    pub overlay_position: ReadSignal<Option<Point>>,
    pub dragging: Signal<bool>,
    suppress_click: StoredValue<bool>,
}

impl DragHook {
    /// True for the click the browser dispatches right after a drop.
    pub fn click_suppressed(&self) -> bool {
        self.suppress_click.get_value()
    }
}

pub fn use_drag_and_drop(board: RwSignal<Board>, config: &BoardConfig) -> DragHook {
    let sensor = StoredValue::new(PointerSensor::new(ActivationConstraint {
        distance: config.activation_distance,
    }));
    let grab_offset = StoredValue::new(Point::default());
    let last_over = StoredValue::new(None::<DragItem>);
    let suppress_click = StoredValue::new(false);
    let overlay_position = RwSignal::new(None::<Point>);

    let begin = Callback::new(move |down: PointerDown| {
        let mut armed = false;
        sensor.update_value(|s| armed = s.pointer_down(down.item, down.pointer_id, down.position));
        if armed {
            grab_offset.set_value(down.grab_offset);
        }
    });

    // Emit drag-over only when the droppable under the pointer changes
    let track_over = move |active: DragItem, position: Point| {
        let over = hit_test(position);
        if last_over.with_value(|last| *last == over) {
            return;
        }
        last_over.set_value(over.clone());
        drag_over(DragOverEvent { active, over }, board);
    };

    let move_handle = window_event_listener(ev::pointermove, move |ev| {
        let position = pointer_position(&ev);
        let mut outcome = SensorEvent::Ignored;
        sensor.update_value(|s| outcome = s.pointer_move(ev.pointer_id(), position));

        let active = match outcome {
            SensorEvent::Activated(active) => {
                last_over.set_value(None);
                drag_start(DragStartEvent { active: active.clone() }, board);
                active
            }
            SensorEvent::Moved => match sensor.with_value(|s| s.active().cloned()) {
                Some(active) => active,
                None => return,
            },
            SensorEvent::Pending | SensorEvent::Ignored => return,
        };

        ev.prevent_default();
        overlay_position.set(Some(position.offset_by(grab_offset.get_value())));
        track_over(active, position);
    });

    let up_handle = window_event_listener(ev::pointerup, move |ev| {
        let mut released = None;
        sensor.update_value(|s| released = s.pointer_up(ev.pointer_id()));
        let Some(active) = released else {
            return;
        };

        let over = hit_test(pointer_position(&ev));
        last_over.set_value(None);
        overlay_position.set(None);

        suppress_click.set_value(true);
        Timeout::new(0, move || suppress_click.set_value(false)).forget();

        drag_end(DragEndEvent { active, over }, board);
    });

    let cancel = move || {
        let mut cancelled = None;
        sensor.update_value(|s| cancelled = s.cancel());
        if cancelled.is_some() {
            last_over.set_value(None);
            overlay_position.set(None);
            drag_cancel(board);
        }
    };

    let cancel_handle = window_event_listener(ev::pointercancel, move |_| cancel());
    let key_handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            cancel();
        }
    });

    on_cleanup(move || {
        move_handle.remove();
        up_handle.remove();
        cancel_handle.remove();
        key_handle.remove();
    });

    DragHook {
        begin,
        overlay_position: overlay_position.read_only(),
        dragging: Signal::derive(move || board.with(|b| b.active.is_some())),
        suppress_click,
    }
}

fn pointer_position(ev: &web_sys::PointerEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

// Nearest sortable ancestor of the topmost element under the pointer
fn hit_test(position: Point) -> Option<DragItem> {
    let element = document().element_from_point(position.x as f32, position.y as f32)?;
    let target = element.closest(&format!("[{}]", ID_ATTR)).ok()??;
    let id = target.get_attribute(ID_ATTR)?;
    let kind = DragKind::from_attr(&target.get_attribute(KIND_ATTR)?)?;
    Some(DragItem { id, kind })
}
