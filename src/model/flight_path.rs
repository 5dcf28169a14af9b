use crate::geometry::Segment;
use crate::RenderPoint;

/// Observable lifecycle phase of the flight path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightPhase {
    /// No points placed.
    Empty,
    /// Entry placed, awaiting exit.
    Pending,
    /// Both endpoints placed; they can only move via [`FlightPathModel::relocate`].
    Defined,
}

/// Which endpoint of a defined path to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathEndpoint {
    Entry,
    Exit,
}

#[derive(Clone, Copy, Debug)]
enum Endpoints {
    Empty,
    Pending { entry: RenderPoint },
    Defined { entry: RenderPoint, exit: RenderPoint },
}

/// The aircraft's entry/exit markers as the user placed them.
///
/// Placement is progressive: the first [`place_point`](Self::place_point)
/// stores the entry, the second stores the exit, and further placements are
/// inert. A completed path is adjusted through [`relocate`](Self::relocate),
/// so out-of-phase mutations cannot be expressed. The extended corridor is
/// never stored here; callers derive it from
/// [`effective_segment`](Self::effective_segment) at query time.
///
/// Every state change synchronously invokes the registered observer exactly
/// once with the current segment (`None` unless the path is defined).
#[derive(Default)]
pub struct FlightPathModel {
    points: Endpoints,
    observer: Option<Box<dyn FnMut(Option<Segment>)>>,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints::Empty
    }
}

impl FlightPathModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the single change observer, replacing any previous one.
    pub fn on_change(&mut self, observer: impl FnMut(Option<Segment>) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Place the next endpoint. Advances `Empty -> Pending -> Defined`;
    /// inert once the path is defined. Returns the resulting phase.
    pub fn place_point(&mut self, p: RenderPoint) -> FlightPhase {
        match self.points {
            Endpoints::Empty => {
                self.points = Endpoints::Pending { entry: p };
                self.notify();
            }
            Endpoints::Pending { entry } => {
                self.points = Endpoints::Defined { entry, exit: p };
                self.notify();
            }
            Endpoints::Defined { .. } => {}
        }
        self.phase()
    }

    /// Move one endpoint of a defined path; the phase stays `Defined`.
    /// Inert unless the path is defined.
    pub fn relocate(&mut self, which: PathEndpoint, p: RenderPoint) {
        if let Endpoints::Defined { entry, exit } = self.points {
            self.points = match which {
                PathEndpoint::Entry => Endpoints::Defined { entry: p, exit },
                PathEndpoint::Exit => Endpoints::Defined { entry, exit: p },
            };
            self.notify();
        }
    }

    /// Clear both endpoints from any phase.
    pub fn reset(&mut self) {
        self.points = Endpoints::Empty;
        self.notify();
    }

    pub fn phase(&self) -> FlightPhase {
        match self.points {
            Endpoints::Empty => FlightPhase::Empty,
            Endpoints::Pending { .. } => FlightPhase::Pending,
            Endpoints::Defined { .. } => FlightPhase::Defined,
        }
    }

    pub fn entry(&self) -> Option<RenderPoint> {
        match self.points {
            Endpoints::Empty => None,
            Endpoints::Pending { entry } | Endpoints::Defined { entry, .. } => Some(entry),
        }
    }

    pub fn exit(&self) -> Option<RenderPoint> {
        match self.points {
            Endpoints::Defined { exit, .. } => Some(exit),
            _ => None,
        }
    }

    /// The segment exactly as placed, only once both endpoints exist.
    pub fn effective_segment(&self) -> Option<Segment> {
        match self.points {
            Endpoints::Defined { entry, exit } => Some(Segment::new(entry, exit)),
            _ => None,
        }
    }

    fn notify(&mut self) {
        let segment = self.effective_segment();
        if let Some(observer) = self.observer.as_mut() {
            observer(segment);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_model() -> (FlightPathModel, Rc<RefCell<Vec<Option<Segment>>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut model = FlightPathModel::new();
        model.on_change(move |segment| sink.borrow_mut().push(segment));
        (model, seen)
    }

    #[test]
    fn placement_advances_through_phases() {
        let mut model = FlightPathModel::new();
        assert_eq!(model.phase(), FlightPhase::Empty);
        assert!(model.effective_segment().is_none());

        assert_eq!(model.place_point(RenderPoint::new(0.0, 0.0)), FlightPhase::Pending);
        assert_eq!(model.entry(), Some(RenderPoint::new(0.0, 0.0)));
        assert!(model.exit().is_none());
        assert!(model.effective_segment().is_none());

        assert_eq!(model.place_point(RenderPoint::new(10.0, -5.0)), FlightPhase::Defined);
        let segment = model.effective_segment().expect("defined segment");
        assert_eq!(segment.start, RenderPoint::new(0.0, 0.0));
        assert_eq!(segment.end, RenderPoint::new(10.0, -5.0));
    }

    #[test]
    fn placement_is_inert_once_defined() {
        let (mut model, seen) = recording_model();
        model.place_point(RenderPoint::new(0.0, 0.0));
        model.place_point(RenderPoint::new(10.0, 0.0));
        let before = model.effective_segment();

        assert_eq!(model.place_point(RenderPoint::new(99.0, 99.0)), FlightPhase::Defined);
        assert_eq!(model.effective_segment(), before);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn relocate_moves_endpoints_and_keeps_defined() {
        let (mut model, seen) = recording_model();
        model.place_point(RenderPoint::new(0.0, 0.0));
        model.place_point(RenderPoint::new(10.0, 0.0));

        model.relocate(PathEndpoint::Exit, RenderPoint::new(20.0, -4.0));
        assert_eq!(model.phase(), FlightPhase::Defined);
        assert_eq!(model.exit(), Some(RenderPoint::new(20.0, -4.0)));

        model.relocate(PathEndpoint::Entry, RenderPoint::new(-2.0, 1.0));
        assert_eq!(model.entry(), Some(RenderPoint::new(-2.0, 1.0)));
        assert_eq!(seen.borrow().len(), 4);
    }

    #[test]
    fn relocate_before_defined_is_inert() {
        let (mut model, seen) = recording_model();
        model.relocate(PathEndpoint::Entry, RenderPoint::new(1.0, 1.0));
        assert_eq!(model.phase(), FlightPhase::Empty);

        model.place_point(RenderPoint::new(0.0, 0.0));
        model.relocate(PathEndpoint::Exit, RenderPoint::new(1.0, 1.0));
        assert_eq!(model.phase(), FlightPhase::Pending);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn every_mutation_notifies_with_current_segment() {
        let (mut model, seen) = recording_model();
        model.place_point(RenderPoint::new(0.0, 0.0));
        model.place_point(RenderPoint::new(10.0, 0.0));
        model.reset();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert!(seen[0].is_none());
        assert!(seen[1].is_some());
        assert!(seen[2].is_none());
    }

    #[test]
    fn reset_returns_to_empty_from_any_phase() {
        let mut model = FlightPathModel::new();
        model.place_point(RenderPoint::new(0.0, 0.0));
        model.reset();
        assert_eq!(model.phase(), FlightPhase::Empty);
        assert!(model.entry().is_none());

        // And the cycle may start again.
        model.place_point(RenderPoint::new(5.0, 5.0));
        assert_eq!(model.phase(), FlightPhase::Pending);
    }
}
