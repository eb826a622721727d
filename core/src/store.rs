use crate::catalogue::{AssociationRow, normalize_year, parse_year};
use crate::error::CatalogueError;
use rusqlite::{Connection, OpenFlags, Row, types::ValueRef};
use rustc_hash::FxHashSet;
use std::{fs::File, io::BufReader, path::Path};

/// Read every actor/director credit from a catalogue.
///
/// `*.json` files are parsed as an array of [`AssociationRow`]; anything
/// else is opened read-only as the SQLite catalogue written by the collector.
pub fn load_association_rows(path: &Path) -> Result<Vec<AssociationRow>, CatalogueError> {
    if !path.exists() {
        return Err(CatalogueError::NotFound(path.to_path_buf()));
    }

    let is_json = path
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));

    let rows = if is_json {
        read_json_rows(path)?
    } else {
        read_sqlite_rows(path)?
    };

    tracing::info!(rows = rows.len(), path = %path.display(), "loaded catalogue rows");
    Ok(rows)
}

fn read_json_rows(path: &Path) -> Result<Vec<AssociationRow>, CatalogueError> {
    let file = File::open(path).map_err(|source| CatalogueError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn table_columns(conn: &Connection, table: &str) -> Result<FxHashSet<String>, rusqlite::Error> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<Result<FxHashSet<_>, _>>()?;
    Ok(columns)
}

fn association_query(conn: &Connection) -> Result<String, rusqlite::Error> {
    let movie_columns = table_columns(conn, "movies")?;
    let credit_columns = table_columns(conn, "movie_people")?;

    // Older catalogues carry poster paths instead of IMDb ids
    let external_id = if movie_columns.contains("imdb_id") {
        "m.imdb_id"
    } else if movie_columns.contains("poster_path") {
        "m.poster_path"
    } else {
        "NULL"
    };
    let character = if credit_columns.contains("character") {
        "mp.\"character\""
    } else {
        "NULL"
    };

    Ok(format!(
        "SELECT
            m.id,
            m.title,
            m.year,
            {external_id},
            p.id,
            p.name,
            mp.role,
            {character}
        FROM movie_people AS mp
        JOIN people AS p ON p.id = mp.person_id
        JOIN movies AS m ON m.id = mp.movie_id
        WHERE mp.role IN ('Actor', 'Director')"
    ))
}

fn read_sqlite_rows(path: &Path) -> Result<Vec<AssociationRow>, CatalogueError> {
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    let query = association_query(&conn)?;

    let mut stmt = conn.prepare(&query)?;
    let rows = stmt
        .query_map([], parse_association_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn parse_association_row(row: &Row<'_>) -> rusqlite::Result<AssociationRow> {
    Ok(AssociationRow {
        movie_id: id_value(row.get_ref(0)?),
        movie_title: text_value(row.get_ref(1)?),
        movie_year: year_value(row.get_ref(2)?),
        movie_external_id: text_value(row.get_ref(3)?),
        person_id: id_value(row.get_ref(4)?),
        person_name: text_value(row.get_ref(5)?),
        role: text_value(row.get_ref(6)?),
        character: text_value(row.get_ref(7)?),
    })
}

// SQLite columns are loosely typed; the collector stored years as text
// prefixes of release dates, so every value is read leniently.

fn id_value(value: ValueRef<'_>) -> Option<i64> {
    match value {
        ValueRef::Integer(id) => Some(id),
        ValueRef::Text(bytes) => std::str::from_utf8(bytes).ok()?.trim().parse().ok(),
        _ => None,
    }
}

fn text_value(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Text(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Integer(number) => Some(number.to_string()),
        ValueRef::Real(number) => Some(number.to_string()),
        ValueRef::Null | ValueRef::Blob(_) => None,
    }
}

fn year_value(value: ValueRef<'_>) -> Option<i32> {
    match value {
        ValueRef::Integer(year) => normalize_year(year),
        ValueRef::Real(year) => normalize_year(year as i64),
        ValueRef::Text(bytes) => std::str::from_utf8(bytes).ok().and_then(parse_year),
        ValueRef::Null | ValueRef::Blob(_) => None,
    }
}
