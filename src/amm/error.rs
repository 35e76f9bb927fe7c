//! Erro unificado do núcleo com contexto estruturado e formatação estável.
use core::fmt;
use core::fmt::Write as _;
use std::collections::BTreeMap;

use crate::amm::error_catalog::{default_locale_message, AmmErrorCode};

const CONTEXT_VALUE_MAX: usize = 256;

/// Troca whitespace de controle por espaço e corta em `CONTEXT_VALUE_MAX` chars.
fn sanitize_value(input: &str) -> String {
    let flat: String = input
        .chars()
        .map(|ch| if matches!(ch, '\n' | '\r' | '\t') { ' ' } else { ch })
        .collect();
    if flat.chars().count() <= CONTEXT_VALUE_MAX {
        return flat;
    }
    let mut cut: String = flat.chars().take(CONTEXT_VALUE_MAX - 1).collect();
    cut.push('…');
    cut
}

fn push_json_str(out: &mut String, input: &str) {
    out.push('"');
    for ch in input.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Substitui `{chave}` pelo valor do contexto; chaves desconhecidas ficam como estão.
fn render_template(template: &str, context: &BTreeMap<String, String>) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let key = &after[..close];
                match context.get(key) {
                    Some(value) => rendered.push_str(value),
                    None => {
                        rendered.push('{');
                        rendered.push_str(key);
                        rendered.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                rendered.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    rendered.push_str(rest);
    rendered
}

/// Erro do núcleo: código do catálogo + contexto chave/valor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmmError {
    pub code: AmmErrorCode,
    pub context: BTreeMap<String, String>,
}

impl AmmError {
    pub fn new(code: AmmErrorCode) -> Self {
        Self { code, context: BTreeMap::new() }
    }

    /// Adiciona um par chave/valor ao contexto (chave vazia é ignorada).
    pub fn with_context<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        let key = key.into();
        if !key.is_empty() {
            self.context.insert(key, sanitize_value(&value.to_string()));
        }
        self
    }

    fn resolved_message(&self) -> String {
        render_template(default_locale_message(self.code), &self.context)
    }

    /// Mensagem curta para UI: `[AMM-000N] mensagem`.
    pub fn to_user_string(&self) -> String {
        format!("[{}] {}", self.code.code(), self.resolved_message())
    }

    pub fn render_with_template(&self, template: &str) -> String {
        render_template(template, &self.context)
    }

    /// JSON de uma linha, chaves em ordem estável, para logs.
    pub fn to_log_json(&self) -> String {
        let mut json = String::from("{\"code\":");
        push_json_str(&mut json, self.code.code());
        json.push_str(",\"title\":");
        push_json_str(&mut json, self.code.title());
        json.push_str(",\"message\":");
        push_json_str(&mut json, &self.resolved_message());
        json.push_str(",\"context\":{");
        for (i, (key, value)) in self.context.iter().enumerate() {
            if i > 0 {
                json.push(',');
            }
            push_json_str(&mut json, key);
            json.push(':');
            push_json_str(&mut json, value);
        }
        json.push_str("}}");
        json
    }
}

impl fmt::Display for AmmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_user_string())
    }
}

impl std::error::Error for AmmError {}

impl From<AmmErrorCode> for AmmError {
    fn from(code: AmmErrorCode) -> Self {
        AmmError::new(code)
    }
}

/// Resultado padrão do núcleo.
pub type Result<T> = std::result::Result<T, AmmError>;

#[macro_export]
macro_rules! amm_err {
    ($code:expr) => {{
        $crate::amm::error::AmmError::new($code)
    }};
    ($code:expr, $($key:ident => $value:expr),+ $(,)?) => {{
        let mut err = $crate::amm::error::AmmError::new($code);
        $(
            err = err.with_context(stringify!($key), $value);
        )+
        err
    }};
}
