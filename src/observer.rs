use crate::{Coordinate, FrontierSet};

/// Receives a read-only view of the open and closed frontiers once per search iteration, before the
/// next node is selected. Used to animate a search; it cannot influence the result.
pub trait StepObserver {
    fn on_step(&mut self, open: &FrontierSet<Coordinate>, closed: &FrontierSet<Coordinate>);
}

impl<F> StepObserver for F
where
    F: FnMut(&FrontierSet<Coordinate>, &FrontierSet<Coordinate>),
{
    fn on_step(&mut self, open: &FrontierSet<Coordinate>, closed: &FrontierSet<Coordinate>) {
        self(open, closed)
    }
}

/// Observer that ignores every step.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _: &FrontierSet<Coordinate>, _: &FrontierSet<Coordinate>) {}
}

/// Frontier contents at the start of one iteration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrontierSnapshot {
    pub open: Vec<Coordinate>,
    pub closed: Vec<Coordinate>,
}

/// Keeps an owned copy of every frontier it is shown, e.g. to replay a search frame by frame.
#[derive(Clone, Debug, Default)]
pub struct FrontierRecorder {
    pub snapshots: Vec<FrontierSnapshot>,
}

impl FrontierRecorder {
    pub fn new() -> FrontierRecorder {
        FrontierRecorder::default()
    }
}

impl StepObserver for FrontierRecorder {
    fn on_step(&mut self, open: &FrontierSet<Coordinate>, closed: &FrontierSet<Coordinate>) {
        self.snapshots.push(FrontierSnapshot {
            open: open.to_vec(),
            closed: closed.to_vec(),
        });
    }
}
