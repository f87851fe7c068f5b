//! Error types for the setwise core library.
//!
//! Defines the error enum exposed by [`crate::DisjointSet`], its stable
//! machine-readable codes and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DisjointSet`] operations.
///
/// Out-of-range labels are contract violations by the caller: they are
/// reported immediately and never retried or swallowed by the store.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// A label was never assigned by [`crate::DisjointSet::add`].
    #[error("label {label} is out of range for a store of {len} elements")]
    LabelOutOfRange {
        /// The label supplied by the caller.
        label: usize,
        /// Number of elements in the store when the call was made.
        len: usize,
    },
    /// The requested canonical label type cannot represent every partition.
    #[error("canonical label type overflowed after assigning {assigned} partitions")]
    CanonicalLabelOverflow {
        /// Number of partitions that received a canonical label before the
        /// output type ran out of values.
        assigned: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// A label was never assigned by the store.
        LabelOutOfRange => LabelOutOfRange { .. } => "DISJOINT_SET_LABEL_OUT_OF_RANGE",
        /// The requested canonical label type cannot represent every partition.
        CanonicalLabelOverflow => CanonicalLabelOverflow { .. } => "DISJOINT_SET_CANONICAL_LABEL_OVERFLOW",
    }
}

impl DisjointSetError {
    /// Returns the offending label when the error reports an out-of-range
    /// lookup.
    ///
    /// # Examples
    /// ```
    /// use setwise_core::DisjointSetError;
    ///
    /// let err = DisjointSetError::LabelOutOfRange { label: 4, len: 4 };
    /// assert_eq!(err.label(), Some(4));
    /// ```
    #[must_use]
    pub const fn label(&self) -> Option<usize> {
        match self {
            Self::LabelOutOfRange { label, .. } => Some(*label),
            Self::CanonicalLabelOverflow { .. } => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, DisjointSetError>;
