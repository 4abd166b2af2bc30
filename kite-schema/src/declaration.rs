//! Static resource declarations.
//!
//! A resource type registers an ordered table of field declarations once,
//! and every schema is derived from that table. Markers are plain data here;
//! nothing is validated until extraction.

use crate::PropertyKind;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::any::{self, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Options carried by a property marker.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyOptions {
    /// Name override. Empty means the declared field name is used.
    pub name: String,
    pub description: String,
    /// Non-empty when the property is deprecated.
    pub deprecation_message: String,
    /// `false` makes the property required.
    pub optional: bool,
    /// Whether the property identifies existing resources on import.
    pub importable: bool,
    /// Whether the property is left out of documentation.
    pub hidden: bool,
    /// `Regular` or `Input`. The cloud marker overrides this with `Output`.
    pub kind: PropertyKind,
    pub default_value: Option<Value>,
}

impl Default for PropertyOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            deprecation_message: String::new(),
            optional: true,
            importable: false,
            hidden: false,
            kind: PropertyKind::Regular,
            default_value: None,
        }
    }
}

impl PropertyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exposes the property under `name` instead of the field name.
    pub fn rename(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn deprecated(mut self, message: impl Into<String>) -> Self {
        self.deprecation_message = message.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.optional = false;
        self
    }

    pub fn importable(mut self) -> Self {
        self.importable = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Marks the property as a user-supplied input.
    pub fn input(mut self) -> Self {
        self.kind = PropertyKind::Input;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

/// One declared field of a resource type, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDeclaration {
    /// Field name as written on the Rust struct.
    pub name: String,
    /// Rust type of the field, as written (e.g. `Option<String>`).
    pub rust_type: String,
    /// Property marker. `None` means the field was never declared as a property.
    pub property: Option<PropertyOptions>,
    /// Cloud-managed marker.
    pub cloud: bool,
}

impl FieldDeclaration {
    pub fn new(name: impl Into<String>, rust_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rust_type: rust_type.into(),
            property: None,
            cloud: false,
        }
    }

    /// Attaches the property marker.
    pub fn property(mut self, options: PropertyOptions) -> Self {
        self.property = Some(options);
        self
    }

    /// Attaches the cloud-managed marker.
    pub fn cloud(mut self) -> Self {
        self.cloud = true;
        self
    }
}

/// The declaration table of one resource type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDeclaration {
    /// Bare Rust type identifier, used when no type name is declared.
    pub ident: String,
    /// Type-name marker: the canonical schema name.
    pub type_name: Option<String>,
    pub description: Option<String>,
    pub uri: Option<String>,
    pub version: Option<String>,
    pub fields: Vec<FieldDeclaration>,
}

impl TypeDeclaration {
    /// Starts a declaration without a type-name marker.
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            type_name: None,
            description: None,
            uri: None,
            version: None,
            fields: Vec::new(),
        }
    }

    /// Attaches the type-name marker.
    pub fn named(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn field(mut self, field: FieldDeclaration) -> Self {
        self.fields.push(field);
        self
    }
}

/// A statically declared resource type.
///
/// Usually implemented through [`kite_resource!`](crate::kite_resource).
pub trait Resource: 'static {
    /// The declaration table, built once per type.
    fn declaration() -> &'static TypeDeclaration;

    /// Current field values keyed by declared field name.
    ///
    /// Used by instance-level extraction. Fields missing from the map, or
    /// mapped to `null`, have no current value.
    fn current_values(&self) -> Map<String, Value> {
        Map::new()
    }
}

/// Resolves a generic parameter to a declared resource type.
///
/// Every [`Resource`] resolves to itself. Types without a static
/// declaration, such as JSON documents fed by an external protocol, resolve
/// to `None` and must be given their type explicitly.
pub trait ManagedType: 'static {
    fn resource_type() -> Option<ResourceType>;
}

impl<R: Resource> ManagedType for R {
    fn resource_type() -> Option<ResourceType> {
        Some(ResourceType::of::<R>())
    }
}

impl ManagedType for Value {
    fn resource_type() -> Option<ResourceType> {
        None
    }
}

/// Runtime reference to a declared resource type.
///
/// Two references are equal when they name the same Rust type and resolve to
/// the same declaration table. JSON-backed types share a Rust type, so the
/// declaration tells them apart.
#[derive(Clone, Copy)]
pub struct ResourceType {
    id: TypeId,
    rust_name: &'static str,
    declaration: fn() -> &'static TypeDeclaration,
}

impl ResourceType {
    #[must_use]
    pub fn of<R: Resource>() -> Self {
        Self {
            id: TypeId::of::<R>(),
            rust_name: any::type_name::<R>(),
            declaration: R::declaration,
        }
    }

    /// References `T` with a declaration supplied from elsewhere, for types
    /// whose shape is not declared on the type itself.
    #[must_use]
    pub fn with_declaration<T: 'static>(declaration: fn() -> &'static TypeDeclaration) -> Self {
        Self {
            id: TypeId::of::<T>(),
            rust_name: any::type_name::<T>(),
            declaration,
        }
    }

    pub fn declaration(&self) -> &'static TypeDeclaration {
        (self.declaration)()
    }

    /// Full Rust path of the referenced type.
    pub fn rust_name(&self) -> &'static str {
        self.rust_name
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for ResourceType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.declaration(), other.declaration())
    }
}

impl Eq for ResourceType {}

impl Hash for ResourceType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        std::ptr::hash(self.declaration(), state);
    }
}

impl fmt::Debug for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ResourceType").field(&self.rust_name).finish()
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rust_name)
    }
}

impl Serialize for ResourceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.rust_name)
    }
}
