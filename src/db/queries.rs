use rusqlite::{params, Connection};

use crate::models::AppointmentRecord;

pub fn insert_appointment(conn: &Connection, record: &AppointmentRecord) -> anyhow::Result<i64> {
    conn.execute(
        "INSERT INTO appointments (name, email, phone_number, appointment_time) VALUES (?1, ?2, ?3, ?4)",
        params![
            record.name,
            record.email,
            record.phone_number,
            record.appointment_time,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_appointments(conn: &Connection) -> anyhow::Result<Vec<AppointmentRecord>> {
    let mut stmt = conn.prepare(
        "SELECT name, email, phone_number, appointment_time FROM appointments ORDER BY id",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(AppointmentRecord {
            name: row.get(0)?,
            email: row.get(1)?,
            phone_number: row.get(2)?,
            appointment_time: row.get(3)?,
        })
    })?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row?);
    }
    Ok(records)
}
