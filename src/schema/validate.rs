use super::{component, content_type, Attribute, SchemaRef};
use crate::populate::{PopulateNode, Relations};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// The populate key is not an attribute of the target schema.
    UnknownAttribute,
    /// The populate key names a scalar, which cannot be populated.
    NotRelational,
    /// A `fields` entry is not a scalar attribute of the target.
    UnknownField(String),
    /// An `on` branch names a component the dynamic zone does not allow.
    UnexpectedComponent(String),
    /// `on` used on something other than a dynamic zone.
    OnOutsideZone,
    /// A media attribute selected with anything but `url` + `alternativeText`.
    MediaNotRestricted,
    /// A component or relation target with no declared schema.
    UnknownTarget(String),
}

/// A populate entry that the backend schema does not support.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    pub path: String,
    pub kind: ViolationKind,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::UnknownAttribute => write!(f, "{}: no such attribute", self.path),
            ViolationKind::NotRelational => {
                write!(f, "{}: scalar attribute cannot be populated", self.path)
            }
            ViolationKind::UnknownField(field) => {
                write!(f, "{}: `{}` is not a scalar field", self.path, field)
            }
            ViolationKind::UnexpectedComponent(tag) => {
                write!(f, "{}: dynamic zone does not allow {}", self.path, tag)
            }
            ViolationKind::OnOutsideZone => {
                write!(f, "{}: `on` is only valid on a dynamic zone", self.path)
            }
            ViolationKind::MediaNotRestricted => write!(
                f,
                "{}: media must select exactly url and alternativeText",
                self.path
            ),
            ViolationKind::UnknownTarget(uid) => write!(f, "{}: no schema for {}", self.path, uid),
        }
    }
}

/// Checks a populate tree against the schema it will be sent for.
pub fn validate(root: SchemaRef, relations: &Relations) -> Vec<SchemaViolation> {
    let mut violations = Vec::new();
    validate_relations("", root, relations, &mut violations);
    violations
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path, name)
    }
}

fn violation(path: String, kind: ViolationKind, out: &mut Vec<SchemaViolation>) {
    out.push(SchemaViolation { path, kind });
}

fn validate_relations(
    path: &str,
    target: SchemaRef,
    relations: &Relations,
    out: &mut Vec<SchemaViolation>,
) {
    match relations {
        Relations::None => {}
        // "*" returns full media objects, which the media policy forbids.
        Relations::All => {
            for (name, attribute) in target.attributes() {
                if matches!(attribute, Attribute::Media { .. }) {
                    violation(join(path, name), ViolationKind::MediaNotRestricted, out);
                }
            }
        }
        Relations::Fields(entries) => {
            for (name, node) in entries {
                let attr_path = join(path, name);
                match target.attribute(name) {
                    Some(attribute) => validate_attribute(attr_path, attribute, node, out),
                    None => violation(attr_path, ViolationKind::UnknownAttribute, out),
                }
            }
        }
    }
}

fn validate_attribute(
    path: String,
    attribute: &Attribute,
    node: &PopulateNode,
    out: &mut Vec<SchemaViolation>,
) {
    match attribute {
        Attribute::Media { .. } => {
            if !node.is_media_selection() {
                violation(path, ViolationKind::MediaNotRestricted, out);
            }
        }
        Attribute::Component { component: uid, .. } => match component(uid) {
            Some(schema) => validate_node(&path, SchemaRef::Component(schema), node, out),
            None => violation(path, ViolationKind::UnknownTarget(uid.to_string()), out),
        },
        Attribute::Relation { target, .. } => match content_type(target) {
            Some(schema) => validate_node(&path, SchemaRef::ContentType(schema), node, out),
            None => violation(path, ViolationKind::UnknownTarget(target.to_string()), out),
        },
        Attribute::DynamicZone { components } => {
            let Some(selection) = node.as_selection() else {
                return;
            };
            for (tag, branch) in &selection.on {
                let branch_path = format!("{}[{}]", path, tag);
                if !components.contains(&tag.as_str()) {
                    violation(
                        branch_path,
                        ViolationKind::UnexpectedComponent(tag.clone()),
                        out,
                    );
                    continue;
                }
                match component(tag) {
                    Some(schema) => {
                        validate_node(&branch_path, SchemaRef::Component(schema), branch, out)
                    }
                    None => violation(branch_path, ViolationKind::UnknownTarget(tag.clone()), out),
                }
            }
        }
        _ => violation(path, ViolationKind::NotRelational, out),
    }
}

fn validate_node(
    path: &str,
    target: SchemaRef,
    node: &PopulateNode,
    out: &mut Vec<SchemaViolation>,
) {
    let Some(selection) = node.as_selection() else {
        return;
    };
    for field in &selection.fields {
        match target.attribute(field) {
            Some(attribute) if attribute.is_scalar() => {}
            _ => violation(
                path.to_string(),
                ViolationKind::UnknownField(field.clone()),
                out,
            ),
        }
    }
    validate_relations(path, target, &selection.populate, out);
    if !selection.on.is_empty() {
        violation(path.to_string(), ViolationKind::OnOutsideZone, out);
    }
}
