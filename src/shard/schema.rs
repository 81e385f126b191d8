//! Shard Schema
//!
//! Every shard uses the same three-field tantivy schema:
//!
//! | Field | Options | Contents |
//! |-------|---------|----------|
//! | `key` | `STRING \| STORED` | Primary key, raw and stored for exact retrieval |
//! | `all` | `TEXT` | The full raw row; default field for free-text queries |
//! | `fields` | JSON `TEXT` | Header-named columns, queryable as `fields.<name>:<term>` |

use tantivy::schema::{Field, Schema, STORED, STRING, TEXT};

pub const FIELD_KEY: &str = "key";
pub const FIELD_ALL: &str = "all";
pub const FIELD_COLUMNS: &str = "fields";

/// The schema plus handles to its fields.
#[derive(Clone)]
pub struct ShardSchema {
    pub schema: Schema,
    pub key: Field,
    pub all: Field,
    pub columns: Field,
}

impl ShardSchema {
    pub fn new() -> Self {
        let mut builder = Schema::builder();
        let key = builder.add_text_field(FIELD_KEY, STRING | STORED);
        let all = builder.add_text_field(FIELD_ALL, TEXT);
        let columns = builder.add_json_field(FIELD_COLUMNS, TEXT);
        let schema = builder.build();

        Self {
            schema,
            key,
            all,
            columns,
        }
    }
}

impl Default for ShardSchema {
    fn default() -> Self {
        Self::new()
    }
}
