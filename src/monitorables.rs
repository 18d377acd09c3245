/// Built-in monitorables configured from the environment
///
/// This module handles:
/// - The catalog of known integrations and their configuration fields
/// - Discovering configured variants from `MO_MONITORABLE_*` variables
/// - Validating each variant's fields
///
/// Variables follow `MO_MONITORABLE_<NAME>_<FIELD>` for the default variant
/// and `MO_MONITORABLE_<NAME>_<VARIANT>_<FIELD>` for named variants.
use crate::config::parse_bool;
use crate::registry::{Monitorable, Registry};
use crate::types::DEFAULT_VARIANT;
use log::debug;
use std::collections::{BTreeMap, HashMap};

const ENV_PREFIX: &str = "MO_MONITORABLE_";

/// How a configuration value is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Url,
    Integer,
    Boolean,
}

/// One configuration field of a monitorable
#[derive(Debug)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// Static description of a built-in monitorable
#[derive(Debug)]
pub struct MonitorableDefinition {
    pub display_name: &'static str,
    pub env_name: &'static str,
    pub fields: &'static [Field],
}

const fn required(name: &'static str, kind: FieldKind) -> Field {
    Field { name, kind, required: true }
}

const fn optional(name: &'static str, kind: FieldKind) -> Field {
    Field { name, kind, required: false }
}

/// Built-in monitorables, in report order
pub const CATALOG: &[MonitorableDefinition] = &[
    MonitorableDefinition {
        display_name: "Azure DevOps",
        env_name: "AZUREDEVOPS",
        fields: &[
            required("URL", FieldKind::Url),
            required("TOKEN", FieldKind::Text),
            optional("TIMEOUT", FieldKind::Integer),
        ],
    },
    MonitorableDefinition {
        display_name: "GitHub",
        env_name: "GITHUB",
        fields: &[
            required("TOKEN", FieldKind::Text),
            optional("URL", FieldKind::Url),
            optional("TIMEOUT", FieldKind::Integer),
            optional("COUNT_CACHE_EXPIRATION", FieldKind::Integer),
        ],
    },
    MonitorableDefinition {
        display_name: "GitLab",
        env_name: "GITLAB",
        fields: &[
            required("TOKEN", FieldKind::Text),
            optional("URL", FieldKind::Url),
            optional("TIMEOUT", FieldKind::Integer),
        ],
    },
    MonitorableDefinition {
        display_name: "HTTP",
        env_name: "HTTP",
        fields: &[optional("TIMEOUT", FieldKind::Integer), optional("SSL_VERIFY", FieldKind::Boolean)],
    },
    MonitorableDefinition {
        display_name: "Jenkins",
        env_name: "JENKINS",
        fields: &[
            required("URL", FieldKind::Url),
            optional("LOGIN", FieldKind::Text),
            optional("TOKEN", FieldKind::Text),
            optional("TIMEOUT", FieldKind::Integer),
            optional("SSL_VERIFY", FieldKind::Boolean),
        ],
    },
    MonitorableDefinition {
        display_name: "Pingdom",
        env_name: "PINGDOM",
        fields: &[
            required("TOKEN", FieldKind::Text),
            optional("URL", FieldKind::Url),
            optional("TIMEOUT", FieldKind::Integer),
            optional("CACHE_EXPIRATION", FieldKind::Integer),
        ],
    },
    MonitorableDefinition {
        display_name: "Port",
        env_name: "PORT",
        fields: &[optional("TIMEOUT", FieldKind::Integer)],
    },
    MonitorableDefinition {
        display_name: "Travis CI",
        env_name: "TRAVISCI",
        fields: &[
            optional("URL", FieldKind::Url),
            optional("TOKEN", FieldKind::Text),
            optional("GITHUB_TOKEN", FieldKind::Text),
            optional("TIMEOUT", FieldKind::Integer),
        ],
    },
];

/// A variable that set one field
#[derive(Debug)]
struct Setting {
    key: String,
    value: String,
}

/// Fields set for one variant
#[derive(Debug, Default)]
struct VariantSettings {
    segment: Option<String>, // variant segment as written in the variable names, None for default
    values: HashMap<&'static str, Setting>,
}

/// A catalog entry bound to the variables found for it
pub struct EnvMonitorable {
    definition: &'static MonitorableDefinition,
    variants: BTreeMap<String, VariantSettings>,
}

impl EnvMonitorable {
    /// Pick this monitorable's variables out of an environment snapshot
    ///
    /// Variables are read in sorted order; when two spellings of a variant
    /// set the same field, the first one wins.
    pub fn from_vars(definition: &'static MonitorableDefinition, vars: &HashMap<String, String>) -> Self {
        let prefix = format!("{}{}_", ENV_PREFIX, definition.env_name);

        // Longest field names first so "GITHUB_TOKEN" is not read as variant "github" + "TOKEN"
        let mut fields: Vec<&'static Field> = definition.fields.iter().collect();
        fields.sort_by_key(|f| std::cmp::Reverse(f.name.len()));

        let mut keys: Vec<&String> = vars.keys().filter(|k| k.starts_with(&prefix)).collect();
        keys.sort();

        let mut variants: BTreeMap<String, VariantSettings> = BTreeMap::new();
        for key in keys {
            let value = vars[key].trim();
            if value.is_empty() {
                continue;
            }

            let Some((segment, field)) = split_variant_field(&key[prefix.len()..], &fields) else {
                debug!("Ignoring unknown {} setting {}", definition.display_name, key);
                continue;
            };

            let variant = segment.map_or_else(|| DEFAULT_VARIANT.to_string(), |s| s.to_ascii_lowercase());
            let settings = variants.entry(variant).or_default();
            if settings.values.contains_key(field) {
                debug!("Ignoring {}: {} is already set for this variant", key, field);
                continue;
            }
            if settings.segment.is_none() {
                settings.segment = segment.map(str::to_string);
            }
            settings.values.insert(field, Setting { key: key.clone(), value: value.to_string() });
        }

        Self { definition, variants }
    }

    /// Variable name for a field of a variant, as the user would write it
    fn env_key(&self, segment: Option<&str>, field: &str) -> String {
        match segment {
            None => format!("{}{}_{}", ENV_PREFIX, self.definition.env_name, field),
            Some(segment) => format!("{}{}_{}_{}", ENV_PREFIX, self.definition.env_name, segment, field),
        }
    }
}

/// Split "<VARIANT>_<FIELD>" or "<FIELD>" into a variant segment and field
///
/// A segment spelling the reserved default variant is not a valid variant.
fn split_variant_field<'a>(rest: &'a str, fields: &[&'static Field]) -> Option<(Option<&'a str>, &'static str)> {
    if let Some(field) = fields.iter().find(|f| f.name == rest) {
        return Some((None, field.name));
    }

    fields.iter().find_map(|f| {
        let segment = rest.strip_suffix(f.name)?.strip_suffix('_')?;
        if segment.is_empty() || segment.eq_ignore_ascii_case(DEFAULT_VARIANT) {
            None
        } else {
            Some((Some(segment), f.name))
        }
    })
}

/// Check one value against its field kind
fn check_value(kind: FieldKind, key: &str, value: &str) -> Option<String> {
    match kind {
        FieldKind::Text => None,
        FieldKind::Url => {
            if value.starts_with("http://") || value.starts_with("https://") {
                None
            } else {
                Some(format!("Invalid {} field. Must be an http(s) URL, got {:?}", key, value))
            }
        }
        FieldKind::Integer => match value.parse::<u64>() {
            Ok(_) => None,
            Err(_) => Some(format!("Invalid {} field. Must be a positive integer, got {:?}", key, value)),
        },
        FieldKind::Boolean => parse_bool(value).err().map(|e| format!("Invalid {} field. {}", key, e)),
    }
}

impl Monitorable for EnvMonitorable {
    fn display_name(&self) -> String {
        self.definition.display_name.to_string()
    }

    fn variant_names(&self) -> Vec<String> {
        let mut names = vec![DEFAULT_VARIANT.to_string()];
        names.extend(self.variants.keys().filter(|v| *v != DEFAULT_VARIANT).cloned());
        names
    }

    fn validate(&self, variant: &str) -> (bool, Vec<String>) {
        let Some(settings) = self.variants.get(variant).filter(|s| !s.values.is_empty()) else {
            return (false, Vec::new());
        };

        let mut errors = Vec::new();
        for field in self.definition.fields {
            match settings.values.get(field.name) {
                Some(setting) => errors.extend(check_value(field.kind, &setting.key, &setting.value)),
                None if field.required => {
                    let key = self.env_key(settings.segment.as_deref(), field.name);
                    errors.push(format!("Required {} field is missing", key));
                }
                None => {}
            }
        }

        (errors.is_empty(), errors)
    }
}

/// Registry of every built-in monitorable, configured from `vars`
pub fn builtin_registry(vars: &HashMap<String, String>) -> Registry {
    let mut registry = Registry::new();
    for definition in CATALOG {
        registry.register(Box::new(EnvMonitorable::from_vars(definition, vars)));
    }
    registry
}

#[cfg(test)]
#[path = "monitorables_test.rs"]
mod monitorables_test;
