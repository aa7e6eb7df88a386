//! Natural ordering of codes and HTML reports over identified objects.
//!
//! The comparator in [`compare`] orders codes the way a reader expects
//! (`4326` before `27561` before `EPSG`). Reports render packaged templates
//! where every `${KEY}` placeholder is filled from layered [`Properties`] or
//! from a computed section:
//!
//! ```
//! use geoapi_report::{Properties, render_str};
//!
//! let mut properties = Properties::new();
//! properties.set("NAME", "World");
//! assert_eq!(render_str("Hello ${NAME}", &properties).unwrap(), "Hello World\n");
//! ```

pub mod authority_codes;
pub mod compare;
pub mod error;
pub mod html;
pub mod identifier;
pub mod operation_parameters;
pub mod progress;
pub mod properties;
pub mod report;
pub mod report_set;
pub mod resources;
pub mod template;

pub use authority_codes::{AuthorityCodes, AuthorityCodesReport, AuthorityEntry, ObjectKind};
pub use error::{ReportError, Result};
pub use identifier::{IdentifiedObject, Identifier, ScopedName};
pub use operation_parameters::{Operation, OperationParametersReport};
pub use progress::{FnProgress, LogProgress, ProgressChain, ProgressHandle, ProgressListener};
pub use properties::Properties;
pub use report::{Citation, Party, Report, ReportBase};
pub use report_set::ReportSet;
pub use template::{ContentHook, NoContent, Renderer, render_str};
