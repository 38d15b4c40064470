/// Marker for a model whose parameters are still being fitted.
///
/// Only `Model<Unfitted>` implements [`TrainableModel`](super::TrainableModel),
/// so the driver can mutate it but nothing can call `predict` on it.
#[derive(Debug, Clone, Copy)]
pub struct Unfitted;

/// Marker for a model whose parameters are frozen.
///
/// A `Fitted` model holds only the weights and bias. The learning rate,
/// tolerance and loss trace stay with the driver and its report.
#[derive(Debug, Clone, Copy)]
pub struct Fitted;
