/// ## Dialect switches
///
/// Both default to the historical behavior of TL.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// `*` computes a product. Historical TL subtracts.
    pub product_multiply: bool,
    /// A label defined twice is an error instead of the last one winning.
    pub strict_labels: bool,
}
