use std::cell::RefCell;
use std::fmt;
use std::sync::{Arc, mpsc};

use parking_lot::ReentrantMutex;

use crate::*;

struct Inner {
    state: CubeState,
    observers: Vec<(ObserverId, Observer)>,
    next_observer_id: u64,
    quiet: bool,
}

/// Shared, observable cube.
///
/// All access goes through a single re-entrant lock. A mutation holds the lock
/// from argument validation until every observer has returned, so other
/// threads never see a partially applied twist. Observers run on the mutating
/// thread and may call back into the cube.
pub struct Cube {
    kind: CubeKind,
    inner: ReentrantMutex<RefCell<Inner>>,
}

impl fmt::Debug for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cube")
            .field("kind", &self.kind)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl Clone for Cube {
    /// Clones the state. Observers are not cloned.
    fn clone(&self) -> Self {
        let ret = Self::new(self.kind);
        ret.inner.lock().borrow_mut().state = self.state();
        ret
    }
}

impl Cube {
    /// Constructs a solved cube.
    pub fn new(kind: CubeKind) -> Self {
        Self {
            kind,
            inner: ReentrantMutex::new(RefCell::new(Inner {
                state: CubeState::new(kind.variant()),
                observers: vec![],
                next_observer_id: 0,
                quiet: false,
            })),
        }
    }

    /// Returns the kind of cube.
    pub fn kind(&self) -> CubeKind {
        self.kind
    }
    /// Returns the number of layers along each axis.
    pub fn layer_count(&self) -> u8 {
        self.kind.layer_count()
    }
    /// Returns the variant descriptor.
    pub fn variant(&self) -> &'static VariantDescriptor {
        self.kind.variant()
    }

    fn read<R>(&self, f: impl FnOnce(&CubeState) -> R) -> R {
        let guard = self.inner.lock();
        let inner = guard.borrow();
        f(&inner.state)
    }

    /// Runs `f` on the state under the lock, then notifies observers of the
    /// event it returns before releasing the lock.
    fn mutate<R, E>(
        &self,
        f: impl FnOnce(&mut CubeState) -> Result<(R, Option<CubeEvent>), E>,
    ) -> Result<R, E> {
        let guard = self.inner.lock();
        let (ret, event, observers) = {
            let mut inner = guard.borrow_mut();
            let (ret, event) = f(&mut inner.state)?;
            let observers: Vec<Observer> = if inner.quiet {
                vec![]
            } else {
                inner.observers.iter().rev().map(|(_, o)| Arc::clone(o)).collect()
            };
            (ret, event, observers)
        };
        if let Some(event) = event {
            for observer in observers {
                observer(&event);
            }
        }
        drop(guard);
        Ok(ret)
    }

    fn changed(affected_locations: Vec<usize>) -> Option<CubeEvent> {
        Some(CubeEvent::Changed {
            affected_locations: Some(affected_locations),
        })
    }

    /// Twists the cube.
    ///
    /// `angle` is a signed number of quarter turns from -2 to 2. Each layer
    /// in `layer_mask` is twisted using the variant's elementary twists.
    /// Observers are notified unless `angle` is 0; a `layer_mask` of 0 twists
    /// nothing but still notifies.
    pub fn transform(&self, axis: u8, layer_mask: LayerMaskUint, angle: i8) -> Result<(), TwistError> {
        self.apply(Twist::new(axis, layer_mask, angle))
    }

    /// Applies a twist. See [`Cube::transform()`].
    pub fn apply(&self, twist: Twist) -> Result<(), TwistError> {
        self.mutate(|state| {
            let affected_locations = state.apply_twist(twist)?;
            if twist.angle == 0 {
                return Ok(((), None));
            }
            log::debug!("{}: twisted {twist}", self.kind.id());
            let event = CubeEvent::Twisted(TwistEvent {
                axis: twist.axis,
                layer_mask: twist.layer_mask,
                angle: twist.angle,
                affected_locations,
            });
            Ok(((), Some(event)))
        })
    }

    /// Applies each twist in turn, stopping at the first invalid one.
    pub fn apply_all(&self, twists: impl IntoIterator<Item = Twist>) -> Result<(), TwistError> {
        let _guard = self.inner.lock();
        twists.into_iter().try_for_each(|t| self.apply(t))
    }

    /// Resolves a swipe and applies the resulting twist, which is returned.
    pub fn swipe(
        &self,
        part: usize,
        orientation: u8,
        direction: u8,
        modifiers: GestureModifiers,
    ) -> Result<Twist, TwistError> {
        let _guard = self.inner.lock();
        let twist = self.read(|s| s.resolve_swipe(part, orientation, direction, modifiers))?;
        self.apply(twist)?;
        Ok(twist)
    }

    /// Resolves a click and applies the resulting twist, which is returned.
    pub fn click(
        &self,
        part: usize,
        orientation: u8,
        modifiers: GestureModifiers,
    ) -> Result<Twist, TwistError> {
        let _guard = self.inner.lock();
        let twist = self.read(|s| s.resolve_click(part, orientation, modifiers))?;
        self.apply(twist)?;
        Ok(twist)
    }

    /// Returns the axis of the twist triggered by a swipe.
    pub fn swipe_axis(&self, part: usize, orientation: u8, direction: u8) -> Result<u8, TwistError> {
        self.read(|s| s.swipe_axis(part, orientation, direction))
    }
    /// Returns the layer mask of the twist triggered by a swipe.
    pub fn swipe_layer_mask(
        &self,
        part: usize,
        orientation: u8,
        direction: u8,
    ) -> Result<LayerMaskUint, TwistError> {
        self.read(|s| s.swipe_layer_mask(part, orientation, direction))
    }
    /// Returns the angle of the twist triggered by a swipe.
    pub fn swipe_angle(&self, part: usize, orientation: u8, direction: u8) -> Result<i8, TwistError> {
        self.read(|s| s.swipe_angle(part, orientation, direction))
    }

    /// Returns a snapshot of the state.
    pub fn state(&self) -> CubeState {
        self.read(CubeState::clone)
    }

    /// Returns every part to its home location and orientation.
    pub fn reset(&self) {
        let result: Result<(), std::convert::Infallible> = self.mutate(|state| {
            let affected = state.changed_locations(&CubeState::new(state.variant()));
            state.reset();
            Ok(((), Self::changed(affected)))
        });
        let Ok(()) = result;
    }

    /// Copies the state of another cube with the same layer count.
    pub fn set_to(&self, other: &Cube) -> Result<(), TwistError> {
        let snapshot = other.state();
        self.set_state(&snapshot)
    }

    /// Replaces the state.
    pub fn set_state(&self, new_state: &CubeState) -> Result<(), TwistError> {
        self.mutate(|state| {
            let affected = state.set_to(new_state)?;
            Ok(((), Self::changed(affected)))
        })
    }

    /// Applies the permutation that takes the solved state to `tx` on top of
    /// the current state.
    pub fn transform_by(&self, tx: &CubeState) -> Result<(), TwistError> {
        self.mutate(|state| {
            let affected = state.transform_by(tx)?;
            Ok(((), Self::changed(affected)))
        })
    }

    /// Returns the stickers of the current state.
    pub fn to_stickers(&self) -> Result<StickerGrid, ConfigurationError> {
        self.read(CubeState::to_stickers)
    }

    /// Replaces the state with one reconstructed from stickers. The state is
    /// unchanged on error.
    pub fn set_to_stickers(&self, grid: &StickerGrid) -> Result<(), ConfigurationError> {
        let variant = self.variant();
        self.mutate(|state| {
            let new_state = CubeState::from_stickers(variant, grid).inspect_err(|e| {
                log::warn!("rejected sticker grid: {e}");
            })?;
            let affected = state.changed_locations(&new_state);
            *state = new_state;
            Ok(((), Self::changed(affected)))
        })
    }

    /// Registers an observer and returns a handle for removing it.
    pub fn add_observer(&self, observer: Observer) -> ObserverId {
        let guard = self.inner.lock();
        let mut inner = guard.borrow_mut();
        let id = ObserverId(inner.next_observer_id);
        inner.next_observer_id += 1;
        inner.observers.push((id, observer));
        id
    }

    /// Removes an observer. Returns `false` if it was not registered.
    pub fn remove_observer(&self, id: ObserverId) -> bool {
        let guard = self.inner.lock();
        let mut inner = guard.borrow_mut();
        let len_before = inner.observers.len();
        inner.observers.retain(|(i, _)| *i != id);
        inner.observers.len() != len_before
    }

    /// Returns a channel that receives every event, along with the ID of the
    /// observer feeding it. The observer stays registered after the receiver
    /// is dropped until it is passed to [`Cube::remove_observer()`].
    pub fn subscribe(&self) -> (ObserverId, mpsc::Receiver<CubeEvent>) {
        let (tx, rx) = mpsc::channel();
        let id = self.add_observer(Arc::new(move |event: &CubeEvent| {
            // The receiver may have been dropped.
            let _ = tx.send(event.clone());
        }));
        (id, rx)
    }

    /// Returns whether notifications are suppressed.
    pub fn is_quiet(&self) -> bool {
        self.inner.lock().borrow().quiet
    }

    /// Suppresses or resumes notifications. Leaving quiet mode sends a single
    /// [`CubeEvent::Changed`].
    pub fn set_quiet(&self, quiet: bool) {
        let was_quiet = std::mem::replace(&mut self.inner.lock().borrow_mut().quiet, quiet);
        if was_quiet && !quiet {
            let result: Result<(), std::convert::Infallible> = self.mutate(|_| {
                Ok((
                    (),
                    Some(CubeEvent::Changed {
                        affected_locations: None,
                    }),
                ))
            });
            let Ok(()) = result;
        }
    }

    /// Returns whether the cube is solved.
    pub fn is_solved(&self) -> bool {
        self.read(CubeState::is_solved)
    }
    /// Returns the parts that are not at their home location and orientation.
    pub fn unsolved_parts(&self) -> Vec<usize> {
        self.read(CubeState::unsolved_parts)
    }
    /// Returns the order of the permutation from the solved state.
    pub fn order(&self) -> u64 {
        self.read(CubeState::order)
    }
    /// Returns the order of the permutation as far as the stickers can tell.
    pub fn visible_order(&self) -> u64 {
        self.read(CubeState::visible_order)
    }
    /// Returns the whole-cube orientation.
    pub fn cube_orientation(&self) -> Option<u8> {
        self.read(CubeState::cube_orientation)
    }

    /// Returns the total number of parts, including the center part.
    pub fn part_count(&self) -> usize {
        self.variant().part_count()
    }
    /// Returns the class of a part.
    pub fn part_type(&self, part: usize) -> Option<PartType> {
        self.read(|s| s.part_type(part))
    }
    /// Returns the part at a global location.
    pub fn part_at(&self, location: usize) -> Option<usize> {
        self.read(|s| s.part_at(location))
    }
    /// Returns the global location of a part.
    pub fn part_location(&self, part: usize) -> Option<usize> {
        self.read(|s| s.part_location(part))
    }
    /// Returns the orientation of a part.
    pub fn part_orientation(&self, part: usize) -> Option<u8> {
        self.read(|s| s.part_orientation(part))
    }
    /// Returns the location of a corner.
    pub fn corner_location(&self, corner: usize) -> Option<usize> {
        self.read(|s| s.corner_location(corner))
    }
    /// Returns the location of an edge.
    pub fn edge_location(&self, edge: usize) -> Option<usize> {
        self.read(|s| s.edge_location(edge))
    }
    /// Returns the location of a side.
    pub fn side_location(&self, side: usize) -> Option<usize> {
        self.read(|s| s.side_location(side))
    }
    /// Returns the corner at a corner location.
    pub fn corner_at(&self, location: usize) -> Option<usize> {
        self.read(|s| s.corner_at(location))
    }
    /// Returns the edge at an edge location.
    pub fn edge_at(&self, location: usize) -> Option<usize> {
        self.read(|s| s.edge_at(location))
    }
    /// Returns the side at a side location.
    pub fn side_at(&self, location: usize) -> Option<usize> {
        self.read(|s| s.side_at(location))
    }
    /// Returns the face on which a sticker of a part appears.
    pub fn part_face(&self, part: usize, orientation: u8) -> Option<Face> {
        self.read(|s| s.part_face(part, orientation))
    }
    /// Returns the axis of the twist triggered by clicking a sticker.
    pub fn part_axis(&self, part: usize, orientation: u8) -> Option<u8> {
        self.read(|s| s.part_axis(part, orientation))
    }
    /// Returns the angle of the twist triggered by clicking a sticker.
    pub fn part_angle(&self, part: usize, orientation: u8) -> Option<i8> {
        self.read(|s| s.part_angle(part, orientation))
    }
    /// Returns the layer mask of the twist triggered by clicking a sticker.
    pub fn part_layer_mask(&self, part: usize, orientation: u8) -> Option<LayerMaskUint> {
        self.read(|s| s.part_layer_mask(part, orientation))
    }
}
