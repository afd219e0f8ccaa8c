use serde_json::Value;

/// The canonical, fully converted definition of a block's field schema.
/// This is the target structure for any raw format conversion.
#[derive(Debug, Clone, Default)]
pub struct BlockSchema {
    pub name: String,
    pub fields: Vec<FieldNode>,
}

/// A single node in the field tree: a structural container or a leaf control.
#[derive(Debug, Clone)]
pub struct FieldNode {
    pub id: Option<String>,
    pub label: Option<String>,
    pub hidden: bool,
    /// Visibility conditions as a disjunction of conjunctions:
    /// the outer list is OR, each inner list is AND.
    pub conditions: Vec<Vec<Condition>>,
    pub default: Option<Value>,
    pub options: Vec<FieldOption>,
    pub kind: FieldKind,
}

/// Distinguishes structural containers from leaf controls.
#[derive(Debug, Clone)]
pub enum FieldKind {
    Group { children: Vec<FieldNode> },
    Tabs { tabs: Vec<TabDefinition> },
    Control(ControlType),
}

/// A single tab of a `tabs` container.
#[derive(Debug, Clone)]
pub struct TabDefinition {
    pub title: String,
    pub children: Vec<FieldNode>,
}

/// A selectable option of a select/radio/checkbox control.
#[derive(Debug, Clone)]
pub struct FieldOption {
    pub value: Value,
    pub label: Option<String>,
}

/// The fixed vocabulary of leaf control types.
///
/// Unrecognized type strings are preserved as `Other` so newer authored
/// schemas keep loading on older engine versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlType {
    Text,
    Textarea,
    RichText,
    Number,
    Range,
    Toggle,
    Checkbox,
    Radio,
    Select,
    Color,
    Code,
    Files,
    Other(String),
}

impl ControlType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "text" => Self::Text,
            "textarea" => Self::Textarea,
            "richtext" => Self::RichText,
            "number" => Self::Number,
            "range" => Self::Range,
            "toggle" => Self::Toggle,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "select" => Self::Select,
            "color" => Self::Color,
            "code" => Self::Code,
            "files" => Self::Files,
            other => Self::Other(other.to_string()),
        }
    }

    /// Number-valued controls whose defaults are coerced from strings.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number | Self::Range)
    }
}

/// A single comparison gating a field's visibility.
#[derive(Debug, Clone)]
pub struct Condition {
    /// Attribute id to read the check value from.
    pub id: Option<String>,
    /// Environment key to read the check value from instead of an attribute.
    pub env_key: Option<String>,
    /// `None` when the authored operator string was missing or unrecognized;
    /// such conditions are skipped during evaluation, not counted as failures.
    pub operator: Option<Operator>,
    pub value: Value,
    pub scope: ConditionScope,
}

/// Which attribute map a condition reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConditionScope {
    /// The block's own attributes.
    #[default]
    Current,
    /// The outer (parent block) attributes, for nested-block conditions.
    Outer,
}

/// Comparison operators usable in conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Includes,
    NotIncludes,
    Empty,
    NotEmpty,
    Lt,
    Gt,
    Le,
    Ge,
}

impl Operator {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "==" => Some(Self::Eq),
            "!=" => Some(Self::Ne),
            "includes" => Some(Self::Includes),
            "!includes" => Some(Self::NotIncludes),
            "empty" => Some(Self::Empty),
            "!empty" => Some(Self::NotEmpty),
            "<" => Some(Self::Lt),
            ">" => Some(Self::Gt),
            "<=" => Some(Self::Le),
            ">=" => Some(Self::Ge),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Includes => "includes",
            Self::NotIncludes => "!includes",
            Self::Empty => "empty",
            Self::NotEmpty => "!empty",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Ge => ">=",
        }
    }
}

impl FieldNode {
    /// Creates a leaf control with no conditions or default, as a starting
    /// point for programmatic schema construction.
    pub fn control(id: impl Into<String>, control: ControlType) -> Self {
        Self {
            id: Some(id.into()),
            label: None,
            hidden: false,
            conditions: Vec::new(),
            default: None,
            options: Vec::new(),
            kind: FieldKind::Control(control),
        }
    }

    /// Creates a group container around the given children.
    pub fn group(id: impl Into<String>, children: Vec<FieldNode>) -> Self {
        Self {
            id: Some(id.into()),
            label: None,
            hidden: false,
            conditions: Vec::new(),
            default: None,
            options: Vec::new(),
            kind: FieldKind::Group { children },
        }
    }
}
