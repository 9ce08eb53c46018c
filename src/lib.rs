//! # webphotos
//!
//! Generates a static HTML grid page from a directory of photos. One
//! directory in, one `.html` file out. The filesystem listing is the data
//! source and the page embeds every matching image by filename.
//!
//! # Pipeline
//!
//! The whole run is a single linear pass:
//!
//! ```text
//! source dir → listing (filesystem order) → suffix filter → HTML string → one file write
//! ```
//!
//! There is no intermediate state: regenerating always recomputes from
//! scratch and fully overwrites the output file.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists the source directory and splits entries into matched images and skipped names |
//! | [`generate`] | Renders the gallery document with Maud and writes it to disk |
//! | [`output`] | CLI output formatting for the check and build reports |
//!
//! # Design Decisions
//!
//! ## Listing Order Is the Page Order
//!
//! Images appear on the page in exactly the order the filesystem reports
//! them. No sorting is applied anywhere; callers must not assume
//! alphabetical or chronological order.
//!
//! ## Filenames Pass Through Raw
//!
//! Maud escapes interpolated content by default. This generator opts out for
//! filenames: they are embedded into `src`, `alt`, `href`, and the download
//! handler verbatim, via [`generate::unescaped_filename`]. A filename
//! containing `"` or `<` produces invalid markup. The limitation is
//! documented, and the helper's name keeps it visible at call sites.
//!
//! ## Two Modes, One Generator
//!
//! The plain page and the download-button page share everything except the
//! per-cell controls and the fixed output filename. [`generate::Mode`]
//! selects between them.

pub mod generate;
pub mod output;
pub mod scan;
