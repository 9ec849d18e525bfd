//! Output generation modules for the HTML page, JSON data, and archive index.
//!
//! # Submodules
//!
//! - [`html`]: Renders a [`crate::models::DashboardPage`] to a standalone HTML page
//! - [`json`]: Writes the page data to JSON files for API consumption
//! - [`archive`]: Maintains the archive index of generated editions
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── 2025-08-05/
//!     └── dashboard.json
//!
//! html_output_dir/
//! ├── index.html        # Latest edition
//! ├── 2025-08-05.html   # Dated snapshot
//! └── archivo.html      # Edition index
//! ```

pub mod archive;
pub mod html;
pub mod json;
