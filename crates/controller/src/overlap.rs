//! Reporting non-blocking objects the controller passes through.
use raykin_physics::ObjectId;
use smallvec::SmallVec;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum OverlapEvent {
    Enter(ObjectId),
    Exit(ObjectId),
}

/// Receives overlap changes for objects outside the platform mask, such as pickups and hazards.
pub trait OverlapListener {
    fn on_overlap_enter(&mut self, object: ObjectId);
    fn on_overlap_exit(&mut self, object: ObjectId);
}

/// Ignores everything.
impl OverlapListener for () {
    fn on_overlap_enter(&mut self, _object: ObjectId) {}
    fn on_overlap_exit(&mut self, _object: ObjectId) {}
}

impl OverlapListener for Vec<OverlapEvent> {
    fn on_overlap_enter(&mut self, object: ObjectId) {
        self.push(OverlapEvent::Enter(object));
    }

    fn on_overlap_exit(&mut self, object: ObjectId) {
        self.push(OverlapEvent::Exit(object));
    }
}

impl<L: OverlapListener + ?Sized> OverlapListener for &mut L {
    fn on_overlap_enter(&mut self, object: ObjectId) {
        (**self).on_overlap_enter(object)
    }

    fn on_overlap_exit(&mut self, object: ObjectId) {
        (**self).on_overlap_exit(object)
    }
}

/// The set of objects overlapped as of the last step.
///
/// Kept sorted so that events come out in a stable order: exits first, then enters, each by ascending id.
#[derive(Clone, Debug, Default)]
pub(crate) struct OverlapTracker {
    current: SmallVec<[ObjectId; 4]>,
}

impl OverlapTracker {
    /// Replace the overlapped set with `now`, telling the listener what changed.
    pub(crate) fn update(&mut self, now: impl IntoIterator<Item = ObjectId>, listener: &mut impl OverlapListener) {
        let mut next = now.into_iter().collect::<SmallVec<[ObjectId; 4]>>();
        next.sort_unstable();
        next.dedup();

        for old in self.current.iter() {
            if next.binary_search(old).is_err() {
                log::debug!("Overlap exit {}", old);
                listener.on_overlap_exit(*old);
            }
        }

        for new in next.iter() {
            if self.current.binary_search(new).is_err() {
                log::debug!("Overlap enter {}", new);
                listener.on_overlap_enter(*new);
            }
        }

        self.current = next;
    }

    pub(crate) fn current(&self) -> &[ObjectId] {
        &self.current[..]
    }
}
