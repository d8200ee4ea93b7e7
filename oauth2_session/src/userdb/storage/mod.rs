mod sqlite;
mod store_type;

pub(crate) use sqlite::create_tables_sqlite;
pub(crate) use store_type::UserStore;
