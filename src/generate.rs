//! Gallery page rendering and writing.
//!
//! Takes the scanned image names and produces the complete HTML document,
//! then writes it to a fixed filename chosen by [`Mode`].
//!
//! ## Document Structure
//!
//! ```text
//! <!DOCTYPE html>
//! <html lang="en" class="no-js">
//!   <head>
//!     <link href="style.css" ...>
//!     <style>…</style>              (download mode only)
//!   </head>
//!   <body>
//!     <div class="container additional">
//!       <div class="row">
//!         <div class="col-xl-4">    (one per image, listing order)
//!           <img src="NAME" class="img-fluid" alt="NAME">
//!           <a class="download-btn" …>Download Image</a>   (download mode only)
//!         </div>
//!       </div>
//!     </div>
//!     <script>…</script>            (download mode only)
//!   </body>
//! </html>
//! ```
//!
//! `style.css` and the grid class names (`container`, `row`, `col-xl-4`,
//! `img-fluid`) belong to an external stylesheet that is referenced but
//! neither generated nor validated here.
//!
//! ## Raw Filenames
//!
//! Filenames are inserted into attributes without HTML escaping, through
//! [`unescaped_filename`]. A name containing `"` or `<` corrupts the
//! markup. See the README's known limitations.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! The download-button CSS and the `downloadImage` script are embedded at
//! compile time from `static/`.

use crate::scan::Listing;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

const BUTTON_CSS: &str = include_str!("../static/download.css");
const DOWNLOAD_JS: &str = include_str!("../static/download.js");

/// Which page variant to render, and under which fixed filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Images only.
    Plain,
    /// Each cell gets a download button; the page carries the button CSS
    /// and the `downloadImage` script.
    Download,
}

impl Mode {
    /// The fixed output filename for this variant.
    pub fn output_filename(self) -> &'static str {
        match self {
            Mode::Plain => "webphotos.html",
            Mode::Download => "index.html",
        }
    }
}

/// Embed a filename into markup verbatim, with no HTML escaping.
///
/// Every filename on the page goes through here. The name makes the
/// omission visible at call sites: a filename containing `"` or `<`
/// produces invalid markup, and that is accepted.
pub fn unescaped_filename(name: &str) -> PreEscaped<&str> {
    PreEscaped(name)
}

/// Render the complete gallery document for `images`, in listing order.
pub fn render_gallery(images: &[String], mode: Mode) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class="no-js" {
            head {
                link href="style.css" rel="stylesheet" type="text/css";
                @if mode == Mode::Download {
                    style { (PreEscaped(BUTTON_CSS)) }
                }
            }
            body {
                div.container.additional {
                    div.row {
                        @for name in images {
                            (render_cell(name, mode))
                        }
                    }
                }
                @if mode == Mode::Download {
                    script { (PreEscaped(DOWNLOAD_JS)) }
                }
            }
        }
    }
}

/// Render one grid cell.
///
/// In download mode the button is wired to the cell's own filename.
fn render_cell(name: &str, mode: Mode) -> Markup {
    html! {
        div class="col-xl-4" {
            img src=(unescaped_filename(name)) class="img-fluid" alt=(unescaped_filename(name));
            @if mode == Mode::Download {
                a.download-btn
                    href=(unescaped_filename(name))
                    onclick={ "downloadImage('" (unescaped_filename(name)) "')" } {
                    "Download Image"
                }
            }
        }
    }
}

/// Render the gallery and write it to `output_dir`, returning the path.
///
/// The write truncates any prior file at that path: no backup, no
/// confirmation. Write failures propagate.
pub fn generate(listing: &Listing, mode: Mode, output_dir: &Path) -> Result<PathBuf, GenerateError> {
    let page = render_gallery(&listing.images, mode).into_string();
    let path = output_dir.join(mode.output_filename());
    fs::write(&path, page).map_err(|source| GenerateError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
