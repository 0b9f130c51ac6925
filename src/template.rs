//! Minimal `{var}` substitution for script modules.
//!
//! The script context is a small fixed record with no control flow, so this
//! is deliberately not a general templating engine: four variable names, two
//! brace escapes, nothing else.

/// A variable available to script templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Raw input path, as handed to the action.
    Input,
    /// Input path with its final extension removed.
    Basename,
    /// The final extension, including the leading dot (empty if none).
    Ext,
    /// Resolved output path. Only available to the argument template.
    Output,
}

impl Field {
    fn name(self) -> &'static str {
        match self {
            Field::Input => "input",
            Field::Basename => "basename",
            Field::Ext => "ext",
            Field::Output => "output",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "input" => Some(Field::Input),
            "basename" => Some(Field::Basename),
            "ext" => Some(Field::Ext),
            "output" => Some(Field::Output),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{` with no matching `}`.
    Unclosed,
    /// A `}` with no matching `{` (use `}}` for a literal brace).
    Stray,
    /// A `{name}` reference outside the fixed context record.
    UnknownVar(String),
    /// A variable that exists but has no value in this rendering pass.
    Unavailable(&'static str),
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateError::Unclosed => write!(f, "unclosed '{{'"),
            TemplateError::Stray => write!(f, "stray '}}'"),
            TemplateError::UnknownVar(name) => write!(f, "unknown template variable '{}'", name),
            TemplateError::Unavailable(name) => {
                write!(f, "variable '{}' is not available here", name)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Var(Field),
}

/// A parsed template. Parsing happens once per module; rendering once per
/// input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

/// Per-input values substituted into a template.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub input: String,
    pub basename: String,
    pub ext: String,
    /// Set after the output template renders; the argument template may
    /// reference it.
    pub output: Option<String>,
}

impl RenderContext {
    /// Split an input path into the context fields. The basename strips
    /// exactly the final extension; everything before it stays intact.
    pub fn for_input(input: &str) -> Self {
        let ext_start = std::path::Path::new(input)
            .extension()
            .map(|e| input.len() - e.len() - 1);
        let (basename, ext) = match ext_start {
            Some(i) => (&input[..i], &input[i..]),
            None => (input, ""),
        };
        Self {
            input: input.to_string(),
            basename: basename.to_string(),
            ext: ext.to_string(),
            output: None,
        }
    }

    fn get(&self, field: Field) -> Result<&str, TemplateError> {
        match field {
            Field::Input => Ok(&self.input),
            Field::Basename => Ok(&self.basename),
            Field::Ext => Ok(&self.ext),
            Field::Output => self
                .output
                .as_deref()
                .ok_or(TemplateError::Unavailable(Field::Output.name())),
        }
    }
}

impl Template {
    pub fn parse(src: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = src.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    if chars.peek() == Some(&'{') {
                        chars.next();
                        literal.push('{');
                        continue;
                    }
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => name.push(c),
                            None => return Err(TemplateError::Unclosed),
                        }
                    }
                    let field = Field::from_name(&name)
                        .ok_or_else(|| TemplateError::UnknownVar(name.clone()))?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Var(field));
                }
                '}' => {
                    if chars.peek() == Some(&'}') {
                        chars.next();
                        literal.push('}');
                    } else {
                        return Err(TemplateError::Stray);
                    }
                }
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self { segments })
    }

    pub fn render(&self, ctx: &RenderContext) -> Result<String, TemplateError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => out.push_str(s),
                Segment::Var(field) => out.push_str(ctx.get(*field)?),
            }
        }
        Ok(out)
    }
}
