use std::fmt;

/// A pair of a computed and an expected value, used to report *what* a
/// consensus comparison actually saw instead of a bare boolean failure.
///
/// Every root/bloom/gas comparison in the header validator, body executor and
/// transaction processor reports one of these rather than asserting a plain
/// `==`, mirroring how the teacher's `reth_primitives_traits::GotExpected`
/// is threaded through `reth-consensus`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GotExpected<T> {
    /// The value that was actually computed.
    pub got: T,
    /// The value the header (or caller) claimed.
    pub expected: T,
}

impl<T: fmt::Display> fmt::Display for GotExpected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "got {}, expected {}", self.got, self.expected)
    }
}

impl<T> GotExpected<T> {
    /// Returns `Ok(())` if `got == expected`, `Err(self)` otherwise.
    pub fn ensure(got: T, expected: T) -> Result<(), Self>
    where
        T: PartialEq,
    {
        if got == expected {
            Ok(())
        } else {
            Err(Self { got, expected })
        }
    }
}
