/// Implements [`Resource`](crate::Resource) for a struct from a field table.
///
/// # Usage
///
/// ```
/// use kite_schema::{kite_resource, PropertyOptions, Schema};
/// use serde::Serialize;
///
/// #[derive(Debug, Default, Serialize)]
/// pub struct VpcResource {
///     cidr_block: String,
///     vpc_id: Option<String>,
/// }
///
/// kite_resource!(VpcResource as "Vpc" {
///     cidr_block: String => PropertyOptions::new().required(),
///     #[cloud]
///     vpc_id: Option<String> => PropertyOptions::new().importable(),
/// });
///
/// let schema = Schema::of::<VpcResource>().unwrap();
/// assert_eq!(schema.name(), "Vpc");
/// assert_eq!(schema.to_string(), "schema Vpc {\n\tstring cidr_block\n\t@cloud string vpc_id // importable\n}\n");
/// ```
///
/// Every listed field gets the property marker, with default options when
/// `=> options` is omitted. `#[cloud]` adds the cloud-managed marker. Leaving
/// out `as "Name"` declares the type without a type name. Fields must
/// implement `Serialize` so instance-level extraction can read them; fields
/// not listed are not part of the schema.
#[macro_export]
macro_rules! kite_resource {
    (
        $ty:ident $(as $type_name:literal)? {
            $( $(#[$marker:ident])* $field:ident : $fty:ty $(=> $options:expr)? ),* $(,)?
        }
    ) => {
        impl $crate::Resource for $ty {
            fn declaration() -> &'static $crate::TypeDeclaration {
                static DECLARATION: ::std::sync::OnceLock<$crate::TypeDeclaration> =
                    ::std::sync::OnceLock::new();
                DECLARATION.get_or_init(|| {
                    let declaration = $crate::TypeDeclaration::new(stringify!($ty));
                    $( let declaration = declaration.named($type_name); )?
                    declaration
                    $(
                        .field(
                            $crate::FieldDeclaration::new(stringify!($field), stringify!($fty))
                                .property({
                                    let _options = $crate::PropertyOptions::new();
                                    $( let _options = $options; )?
                                    _options
                                })
                                $( .$marker() )*
                        )
                    )*
                })
            }

            fn current_values(&self) -> $crate::serde_json::Map<String, $crate::serde_json::Value> {
                #[allow(unused_mut)]
                let mut values = $crate::serde_json::Map::new();
                $(
                    if let Ok(value) = $crate::serde_json::to_value(&self.$field) {
                        values.insert(stringify!($field).to_string(), value);
                    }
                )*
                values
            }
        }
    };
}
