//! Resume schema — the only gate between model output and a `ResumeData`.
//!
//! `validate()` walks an untyped `serde_json::Value` against declared per-field
//! rules, collecting every violation in one pass. Either the whole record
//! decodes cleanly or a `SchemaViolation` listing each offending path is returned.
//!
//! Field rules:
//! - every listed string is required (it may be empty) unless marked optional
//! - `header.name` must not be blank
//! - `header.skills` holds at most `MAX_SKILLS` strings
//! - `workExperience[].start` is `YYYY-MM-DD`; `end` is the same, or null/absent/"" for ongoing
//! - `education[].start/end` are empty or a four-digit year
//! - social handles containing whitespace, or shaped like a URL, are blanked, not rejected
//! - unknown keys are ignored

use chrono::NaiveDate;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::resume::{
    Contacts, Education, Header, ResumeData, WorkExperience, MAX_SKILLS,
};

/// A single rule failure at a JSON path such as `workExperience[1].start`.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub path: String,
    pub reason: String,
}

/// Returned when a candidate does not conform. Never empty.
#[derive(Debug, Clone, Error)]
#[error("{}", summarize(.violations))]
pub struct SchemaViolation {
    pub violations: Vec<Violation>,
}

impl SchemaViolation {
    /// Path of the first offending field.
    pub fn first_path(&self) -> &str {
        self.violations
            .first()
            .map(|v| v.path.as_str())
            .unwrap_or("")
    }
}

fn summarize(violations: &[Violation]) -> String {
    match violations {
        [] => "schema violation".to_string(),
        [only] => format!("schema violation at `{}`: {}", only.path, only.reason),
        [first, rest @ ..] => format!(
            "schema violation at `{}`: {} (and {} more)",
            first.path,
            first.reason,
            rest.len()
        ),
    }
}

/// How a string field is checked once it is known to be present.
#[derive(Debug, Clone, Copy)]
enum Text {
    Any,
    NonBlank,
    Date,
    Year,
}

/// How an optional contact field is normalized.
#[derive(Debug, Clone, Copy)]
enum Contact {
    Plain,
    Handle,
}

/// Validates an untrusted candidate and returns a typed resume, or every violation found.
pub fn validate(candidate: &Value) -> Result<ResumeData, SchemaViolation> {
    let mut decoder = Decoder::default();
    let resume = decoder.resume(candidate);

    if decoder.violations.is_empty() {
        Ok(resume)
    } else {
        Err(SchemaViolation {
            violations: decoder.violations,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Decoder
// ────────────────────────────────────────────────────────────────────────────

/// Accumulates violations while producing placeholder values, so a single pass
/// reports everything. The produced value is discarded if any violation exists.
///
/// A parent that is not an object is reported once; its children are skipped
/// (`None`) instead of each being reported as missing.
#[derive(Default)]
struct Decoder {
    violations: Vec<Violation>,
}

type Fields<'a> = Option<&'a Map<String, Value>>;

impl Decoder {
    fn resume(&mut self, value: &Value) -> ResumeData {
        let root = self.object(value, "");
        ResumeData {
            header: self.header(root),
            summary: self.text(root, "", "summary", Text::Any),
            work_experience: self.list(root, "", "workExperience", Self::work_entry),
            education: self.list(root, "", "education", Self::education_entry),
        }
    }

    fn header(&mut self, root: Fields) -> Header {
        let header = self.field_object(root, "", "header");
        Header {
            name: self.text(header, "header", "name", Text::NonBlank),
            short_about: self.text(header, "header", "shortAbout", Text::Any),
            location: self.text(header, "header", "location", Text::Any),
            contacts: self.contacts(header),
            skills: self.skills(header),
        }
    }

    fn contacts(&mut self, header: Fields) -> Contacts {
        let contacts = self.field_object(header, "header", "contacts");
        Contacts {
            website: self.contact(contacts, "website", Contact::Plain),
            email: self.contact(contacts, "email", Contact::Plain),
            phone: self.contact(contacts, "phone", Contact::Plain),
            twitter: self.contact(contacts, "twitter", Contact::Handle),
            linkedin: self.contact(contacts, "linkedin", Contact::Handle),
            github: self.contact(contacts, "github", Contact::Handle),
        }
    }

    fn skills(&mut self, header: Fields) -> Vec<String> {
        let skills = self.list(header, "header", "skills", |d, item, path| {
            d.string(item, path, Text::Any)
        });
        if skills.len() > MAX_SKILLS {
            self.fail(
                "header.skills",
                format!("expected at most {MAX_SKILLS} items, found {}", skills.len()),
            );
        }
        skills
    }

    fn work_entry(&mut self, value: &Value, path: &str) -> WorkExperience {
        let entry = self.object(value, path);
        WorkExperience {
            company: self.text(entry, path, "company", Text::Any),
            link: self.text(entry, path, "link", Text::Any),
            location: self.text(entry, path, "location", Text::Any),
            contract: self.text(entry, path, "contract", Text::Any),
            title: self.text(entry, path, "title", Text::Any),
            start: self.text(entry, path, "start", Text::Date),
            end: self.end_date(entry, path),
            description: self.text(entry, path, "description", Text::Any),
        }
    }

    fn education_entry(&mut self, value: &Value, path: &str) -> Education {
        let entry = self.object(value, path);
        Education {
            school: self.text(entry, path, "school", Text::Any),
            degree: self.text(entry, path, "degree", Text::Any),
            start: self.text(entry, path, "start", Text::Year),
            end: self.text(entry, path, "end", Text::Year),
        }
    }

    /// Absent, null and "" all mean the role is ongoing.
    fn end_date(&mut self, entry: Fields, parent: &str) -> Option<String> {
        match entry?.get("end") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(value) => Some(self.string(value, &join(parent, "end"), Text::Date)),
        }
    }

    fn contact(&mut self, contacts: Fields, key: &str, kind: Contact) -> String {
        let raw = match contacts.and_then(|c| c.get(key)) {
            None | Some(Value::Null) => return String::new(),
            Some(value) => self.string(value, &join("header.contacts", key), Text::Any),
        };
        let trimmed = raw.trim();
        match kind {
            Contact::Handle if !is_bare_handle(trimmed) => String::new(),
            _ => trimmed.to_string(),
        }
    }

    // ── primitives ──────────────────────────────────────────────────────────

    fn text(&mut self, obj: Fields, parent: &str, key: &str, rule: Text) -> String {
        let Some(obj) = obj else {
            return String::new();
        };
        let path = join(parent, key);
        match obj.get(key) {
            Some(value) => self.string(value, &path, rule),
            None => {
                self.fail(&path, "required field is missing");
                String::new()
            }
        }
    }

    fn string(&mut self, value: &Value, path: &str, rule: Text) -> String {
        let Some(s) = value.as_str() else {
            self.fail(path, format!("expected string, found {}", kind(value)));
            return String::new();
        };

        let problem = match rule {
            Text::Any => None,
            Text::NonBlank if s.trim().is_empty() => Some("must not be empty".to_string()),
            Text::NonBlank => None,
            Text::Date if !is_iso_date(s) => Some(format!("expected YYYY-MM-DD date, found {s:?}")),
            Text::Date => None,
            Text::Year if !(s.is_empty() || is_year(s)) => {
                Some(format!("expected four-digit year or empty, found {s:?}"))
            }
            Text::Year => None,
        };
        if let Some(reason) = problem {
            self.fail(path, reason);
        }
        s.to_string()
    }

    fn object<'a>(&mut self, value: &'a Value, path: &str) -> Fields<'a> {
        let obj = value.as_object();
        if obj.is_none() {
            let at = if path.is_empty() { "$" } else { path };
            self.fail(at, format!("expected object, found {}", kind(value)));
        }
        obj
    }

    fn field_object<'a>(&mut self, obj: Fields<'a>, parent: &str, key: &str) -> Fields<'a> {
        let path = join(parent, key);
        match obj?.get(key) {
            Some(value) => self.object(value, &path),
            None => {
                self.fail(&path, "required field is missing");
                None
            }
        }
    }

    fn list<T>(
        &mut self,
        obj: Fields,
        parent: &str,
        key: &str,
        mut decode: impl FnMut(&mut Self, &Value, &str) -> T,
    ) -> Vec<T> {
        let Some(obj) = obj else {
            return Vec::new();
        };
        let path = join(parent, key);
        match obj.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| decode(self, item, &format!("{path}[{i}]")))
                .collect(),
            Some(other) => {
                self.fail(&path, format!("expected array, found {}", kind(other)));
                Vec::new()
            }
            None => {
                self.fail(&path, "required field is missing");
                Vec::new()
            }
        }
    }

    fn fail(&mut self, path: &str, reason: impl Into<String>) {
        self.violations.push(Violation {
            path: path.to_string(),
            reason: reason.into(),
        });
    }
}

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A handle is a single token: no whitespace, no scheme, no path.
fn is_bare_handle(s: &str) -> bool {
    !s.contains(|c: char| c.is_whitespace() || c == '/' || c == ':')
}

fn is_iso_date(s: &str) -> bool {
    s.len() == 10 && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

fn is_year(s: &str) -> bool {
    s.len() == 4 && s.chars().all(|c| c.is_ascii_digit())
}
