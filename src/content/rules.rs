//! The ordered predicate → constructor table behind [`super::describe`].
//!
//! Priority order (first match wins):
//!
//! | # | rule      | matches when                                           |
//! |---|-----------|--------------------------------------------------------|
//! | 1 | row-id    | column id is `rowId`                                   |
//! | 2 | boolean   | value is a boolean, or the id is a boolean field hint  |
//! | 3 | number    | value is a number, or the id is a numeric field hint   |
//! | 4 | markdown  | title contains `bio`, `desc` or `info`                 |
//! | 5 | image     | title contains `img`, `foto`, `photo`, `avatar`, `image` |
//! | 6 | bubble    | title contains `tag` or `status`, or value is a list   |
//! | 7 | uri       | title contains `link`, `url` or `email`                |
//! | - | text      | fallback                                               |
//!
//! Title matching is case-insensitive and uses the undecorated title.

use super::{CellContent, FieldHints, ROW_ID_COLUMN};
use crate::types::{format_number, CellValue, ColumnDescriptor};

const MARKDOWN_KEYWORDS: &[&str] = &["bio", "desc", "info"];
const IMAGE_KEYWORDS: &[&str] = &["img", "foto", "photo", "avatar", "image"];
const BUBBLE_KEYWORDS: &[&str] = &["tag", "status"];
const URI_KEYWORDS: &[&str] = &["link", "url", "email"];

/// Inputs for mapping one cell.
#[derive(Debug, Clone, Copy)]
pub struct CellContext<'a> {
    pub column: &'a ColumnDescriptor,
    /// `None` when the record has no value for this column.
    pub value: Option<&'a CellValue>,
    /// `editing AND !locked AND column editable`
    pub editable: bool,
    pub hints: &'a FieldHints,
}

impl CellContext<'_> {
    fn title_has(&self, keywords: &[&str]) -> bool {
        let title = self.column.title.to_lowercase();
        keywords.iter().any(|k| title.contains(k))
    }

    fn display(&self) -> String {
        self.value.map(CellValue::display).unwrap_or_default()
    }

    /// Image URLs: a list as-is, a falsy value as nothing, anything else as
    /// one URL.
    fn urls(&self) -> Vec<String> {
        match self.value {
            Some(CellValue::List(items)) => items.clone(),
            Some(v) if v.truthy() => vec![v.display()],
            _ => Vec::new(),
        }
    }

    /// Bubble tags: a list as-is, any other defined value (even `""`) as one
    /// tag. Undefined and `null` carry no tags.
    fn tags(&self) -> Vec<String> {
        match self.value {
            Some(CellValue::List(items)) => items.clone(),
            Some(CellValue::Null) | None => Vec::new(),
            Some(v) => vec![v.display()],
        }
    }
}

/// One mapping rule.
pub struct CellRule {
    pub matches: fn(&CellContext<'_>) -> bool,
    pub build: fn(&CellContext<'_>) -> CellContent,
}

pub static CELL_RULES: [CellRule; 7] = [
    // row-id
    CellRule {
        matches: |ctx| ctx.column.id == ROW_ID_COLUMN,
        build: |ctx| CellContent::RowId {
            data: ctx.display(),
        },
    },
    // boolean
    CellRule {
        matches: |ctx| {
            matches!(ctx.value, Some(CellValue::Bool(_))) || ctx.hints.is_boolean(&ctx.column.id)
        },
        build: |ctx| CellContent::Boolean {
            data: ctx.value.is_some_and(CellValue::truthy),
        },
    },
    // number
    CellRule {
        matches: |ctx| {
            matches!(ctx.value, Some(CellValue::Number(_))) || ctx.hints.is_numeric(&ctx.column.id)
        },
        build: |ctx| {
            let n = ctx.value.map_or(0.0, CellValue::coerce_f64);
            let shown = format_number(n);
            let display_data = if ctx.hints.is_percent(&ctx.column.id) {
                format!("{shown}%")
            } else {
                shown
            };
            CellContent::Number {
                data: n,
                display_data,
            }
        },
    },
    // markdown
    CellRule {
        matches: |ctx| ctx.title_has(MARKDOWN_KEYWORDS),
        build: |ctx| CellContent::Markdown {
            data: ctx.display(),
        },
    },
    // image
    CellRule {
        matches: |ctx| ctx.title_has(IMAGE_KEYWORDS),
        build: |ctx| {
            let urls = ctx.urls();
            CellContent::Image {
                display_data: urls.clone(),
                data: urls,
            }
        },
    },
    // bubble
    CellRule {
        matches: |ctx| {
            ctx.title_has(BUBBLE_KEYWORDS) || matches!(ctx.value, Some(CellValue::List(_)))
        },
        build: |ctx| CellContent::Bubble {
            data: ctx.tags(),
        },
    },
    // uri
    CellRule {
        matches: |ctx| ctx.title_has(URI_KEYWORDS),
        build: |ctx| {
            let s = ctx.display();
            CellContent::Uri {
                display_data: s.clone(),
                data: s,
            }
        },
    },
];

/// Fallback rule.
pub(crate) fn plain_text(ctx: &CellContext<'_>) -> CellContent {
    CellContent::text(ctx.display())
}
