use super::step::FlowStep;

/// Observador síncrono de cambios de paso. Se invoca en cada navegación
/// confirmada con el índice nuevo y su paso.
pub trait StepListener: Send {
    fn on_step_change(&mut self, index: usize, step: &FlowStep);
}

impl<F> StepListener for F where F: FnMut(usize, &FlowStep) + Send
{
    fn on_step_change(&mut self, index: usize, step: &FlowStep) {
        self(index, step)
    }
}
