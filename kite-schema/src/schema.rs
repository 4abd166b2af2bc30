use crate::{Property, Resource, ResourceType, SchemaError, SchemaResult, TypeDeclaration};
use serde::Serialize;
use serde_json::{Map, Value};

/// Derived metadata of one resource type.
///
/// A schema is a pure function of the type's declaration (plus, for
/// instance-level extraction, the instance's field values). It is never
/// mutated once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    resource_type: ResourceType,
    properties: Vec<Property>,
}

impl Schema {
    /// Type-level extraction for `R`.
    pub fn of<R: Resource>() -> SchemaResult<Self> {
        Self::from_type(ResourceType::of::<R>())
    }

    /// Type-level extraction: property values carry declared defaults only.
    pub fn from_type(resource_type: ResourceType) -> SchemaResult<Self> {
        extract(resource_type, None)
    }

    /// Instance-level extraction: property values reflect `resource`'s current fields.
    pub fn from_instance<R: Resource>(resource: &R) -> SchemaResult<Self> {
        let values = resource.current_values();
        extract(ResourceType::of::<R>(), Some(&values))
    }

    /// The canonical type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    /// Properties in declaration order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// First property named `name`.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name() == name)
    }

    pub fn outputs(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|p| p.is_output())
    }

    pub fn importable_properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|p| p.is_importable())
    }

    /// Properties that are not hidden from documentation.
    pub fn visible_properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|p| !p.is_hidden())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// The declared type name of `resource_type`, or its bare identifier when
/// none is declared. Never fails.
pub fn schema_name(resource_type: ResourceType) -> String {
    let declaration = resource_type.declaration();
    declared_name(declaration)
        .unwrap_or(&declaration.ident)
        .to_string()
}

/// The type-name marker, unless it is missing or blank.
fn declared_name(declaration: &TypeDeclaration) -> Option<&str> {
    declaration
        .type_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
}

fn extract(resource_type: ResourceType, values: Option<&Map<String, Value>>) -> SchemaResult<Schema> {
    let declaration = resource_type.declaration();
    let name = declared_name(declaration)
        .ok_or_else(|| SchemaError::MissingTypeAnnotation {
            resource: declaration.ident.clone(),
        })?
        .to_string();

    let mut properties: Vec<Property> = Vec::with_capacity(declaration.fields.len());
    for field in &declaration.fields {
        let options = field
            .property
            .as_ref()
            .ok_or_else(|| SchemaError::MissingPropertyAnnotation {
                resource: declaration.ident.clone(),
                field: field.name.clone(),
            })?;

        let current = values
            .and_then(|values| values.get(&field.name))
            .filter(|value| !value.is_null())
            .cloned();
        let property = Property::from_declaration(field, options, current);
        if property.name().is_empty() {
            return Err(SchemaError::EmptyPropertyName {
                resource: declaration.ident.clone(),
            });
        }

        // Identity is the whole property, not its name.
        if !properties.contains(&property) {
            properties.push(property);
        }
    }

    Ok(Schema {
        name,
        description: declaration.description.clone(),
        uri: declaration.uri.clone(),
        version: declaration.version.clone(),
        resource_type,
        properties,
    })
}
