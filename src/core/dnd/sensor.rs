use super::{DragItem, Point};

/// Distance a pressed pointer has to travel before the drag activates.
///
/// Lets clicks on buttons and titles inside a draggable go through untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivationConstraint {
    pub distance: f64,
}

impl Default for ActivationConstraint {
    fn default() -> Self {
        Self { distance: 3.0 }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum SensorState {
    Idle,
    Pending {
        item: DragItem,
        pointer_id: i32,
        origin: Point,
    },
    Dragging {
        item: DragItem,
        pointer_id: i32,
    },
}

/// Outcome of feeding a pointer move to the sensor.
#[derive(Debug, Clone, PartialEq)]
pub enum SensorEvent {
    /// Not our pointer, or nothing armed.
    Ignored,
    /// Armed but still below the activation distance.
    Pending,
    /// The drag just started.
    Activated(DragItem),
    /// An already active drag moved.
    Moved,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointerSensor {
    constraint: ActivationConstraint,
    state: SensorState,
}

impl Default for PointerSensor {
    fn default() -> Self {
        Self::new(ActivationConstraint::default())
    }
}

impl PointerSensor {
    pub fn new(constraint: ActivationConstraint) -> Self {
        Self {
            constraint,
            state: SensorState::Idle,
        }
    }

    /// Arms a pending drag for `item`. Ignored while another pointer is tracked.
    pub fn pointer_down(&mut self, item: DragItem, pointer_id: i32, origin: Point) -> bool {
        if !matches!(self.state, SensorState::Idle) {
            return false;
        }
        self.state = SensorState::Pending { item, pointer_id, origin };
        true
    }

    pub fn pointer_move(&mut self, pointer_id: i32, position: Point) -> SensorEvent {
        match &self.state {
            SensorState::Idle => SensorEvent::Ignored,
            SensorState::Pending { item, pointer_id: tracked, origin } => {
                if *tracked != pointer_id {
                    return SensorEvent::Ignored;
                }
                if origin.distance_to(position) < self.constraint.distance {
                    return SensorEvent::Pending;
                }
                let item = item.clone();
                self.state = SensorState::Dragging {
                    item: item.clone(),
                    pointer_id,
                };
                SensorEvent::Activated(item)
            }
            SensorState::Dragging { pointer_id: tracked, .. } => {
                if *tracked == pointer_id {
                    SensorEvent::Moved
                } else {
                    SensorEvent::Ignored
                }
            }
        }
    }

    /// Releases the pointer. Returns the dragged item if a drag was active.
    pub fn pointer_up(&mut self, pointer_id: i32) -> Option<DragItem> {
        let tracked = match &self.state {
            SensorState::Idle => return None,
            SensorState::Pending { pointer_id, .. } | SensorState::Dragging { pointer_id, .. } => *pointer_id,
        };
        if tracked != pointer_id {
            return None;
        }
        self.finish()
    }

    /// Aborts whatever is tracked. Returns the dragged item if a drag was active.
    pub fn cancel(&mut self) -> Option<DragItem> {
        self.finish()
    }

    pub fn active(&self) -> Option<&DragItem> {
        match &self.state {
            SensorState::Dragging { item, .. } => Some(item),
            _ => None,
        }
    }

    fn finish(&mut self) -> Option<DragItem> {
        match std::mem::replace(&mut self.state, SensorState::Idle) {
            SensorState::Dragging { item, .. } => Some(item),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "sensor_test.rs"]
mod sensor_test;
