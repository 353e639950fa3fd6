/*!
# `marten-json`

A vectorized unescaper for JSON string literals. This library takes the raw
content of a string literal from a previously tokenized JSON document and
expands its escape sequences into UTF-8, chewing through the unescaped bulk
of the string a whole block at a time.

## ⚠️ CAREFUL

This library contains a _lot_ of unsafe code and is very performance sensitive.
Any changes need to be carefully considered and should be:

- tested against the benchmarks to make sure we don't regress (at least not accidentally).
- fuzz tested to ensure there aren't soundness holes introduced.

The decoder trusts properties of tokenized JSON strings to avoid bounds checks:
the input is known to end with an unescaped `"`, so the scan never has to ask
whether there's more input, only where the next interesting byte is. Callers
are responsible for upholding those properties (see [`unescape_trusted`]).

Any unchecked operations performed on the buffers are done using macros that
use the checked variant in test/debug builds (or when the `checked` feature is
enabled) to make sure we don't ever cause UB when working through strings.
*/

#![deny(warnings)]
#![allow(clippy::missing_safety_doc)]

#[macro_use]
mod macros;

mod std_ext;

mod unescape;

pub use unescape::{unescape_trusted, unescape_trusted_fallback, PADDING};

#[cfg(target_arch = "x86_64")]
pub use unescape::{unescape_trusted_avx2, unescape_trusted_sse2};

#[cfg(target_arch = "aarch64")]
pub use unescape::unescape_trusted_neon;
