/// A page-size request as it arrives from a UI event.
///
/// Selectors hand over integers, free-form inputs may hand over floats
/// (including NaN). Both resolve through [`PageSizeRequest::resolve`], which
/// yields `None` for anything that is not a usable size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageSizeRequest {
    Whole(i128),
    Fractional(f64),
}

impl PageSizeRequest {
    /// Resolve to a page size `>= 1`, or `None` when the request must be
    /// ignored.
    ///
    /// Fractional sizes are truncated toward zero; sizes past `usize::MAX`
    /// saturate.
    pub fn resolve(self) -> Option<usize> {
        match self {
            PageSizeRequest::Whole(value) if value > 0 => {
                Some(usize::try_from(value).unwrap_or(usize::MAX))
            }
            PageSizeRequest::Whole(_) => None,
            PageSizeRequest::Fractional(value) if value.is_finite() && value > 0.0 => {
                let size = value.trunc() as usize;
                (size > 0).then_some(size)
            }
            PageSizeRequest::Fractional(_) => None,
        }
    }
}

macro_rules! impl_whole_request {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PageSizeRequest {
                fn from(value: $ty) -> Self {
                    PageSizeRequest::Whole(value as i128)
                }
            }
        )*
    };
}

impl_whole_request!(i32, i64, isize, u32, u64, usize);

impl From<f64> for PageSizeRequest {
    fn from(value: f64) -> Self {
        PageSizeRequest::Fractional(value)
    }
}

impl From<f32> for PageSizeRequest {
    fn from(value: f32) -> Self {
        PageSizeRequest::Fractional(f64::from(value))
    }
}
