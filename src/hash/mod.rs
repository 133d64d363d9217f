//! Hash module
//!
//! MurmurHash3 (x86, 32-bit) and the favicon digests built on top of it.
//! The favicon digest is the signal fingerprinting tools such as Shodan and
//! FOFA use to identify a site by its icon.

mod favicon;
mod murmur3;

pub use favicon::FaviconDigest;
