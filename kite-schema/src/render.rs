//! Schema DSL text.
//!
//! ```text
//! schema Vpc {
//! 	string cidr_block
//! 	@cloud string vpc_id // importable
//! }
//! ```
//!
//! One tab-indented line per property. Cloud-managed (output) properties
//! carry the `@cloud` decorator; the `input`/`output` keyword prefix is not
//! emitted.

use crate::{ResourceType, Schema, SchemaResult};
use std::fmt;

/// Decorator prefix for cloud-managed properties.
pub const CLOUD_DECORATOR: &str = "@cloud ";

/// Trailing marker for importable properties.
pub const IMPORTABLE_COMMENT: &str = " // importable";

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "schema {} {{", self.name())?;
        for property in self.properties() {
            f.write_str("\t")?;
            if property.is_output() {
                f.write_str(CLOUD_DECORATOR)?;
            }
            write!(f, "{} {}", property.declared_type(), property.name())?;
            if property.is_importable() {
                f.write_str(IMPORTABLE_COMMENT)?;
            }
            f.write_str("\n")?;
        }
        f.write_str("}\n")
    }
}

/// Renders the schema text of a resource type straight from its declaration.
pub fn schema_text(resource_type: ResourceType) -> SchemaResult<String> {
    Ok(Schema::from_type(resource_type)?.to_string())
}
