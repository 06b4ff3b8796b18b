use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Terminator, WriterBuilder};

use crate::api::models::InstanceRecord;
use crate::error::AppResult;

pub const REPORT_HEADER: [&str; 5] = [
    "AccountId",
    "Region",
    "InstanceName",
    "InstanceType",
    "EngineType",
];

/// Writes the report to `path`, replacing any previous file.
pub fn write_report(path: &Path, records: &[InstanceRecord]) -> AppResult<()> {
    let file = File::create(path)?;
    write_records(file, records)
}

/// Header first, then one row per record in the order given. The header is
/// written even when there are no records.
pub fn write_records<W: Write>(sink: W, records: &[InstanceRecord]) -> AppResult<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(sink);

    writer.write_record(REPORT_HEADER)?;
    for record in records {
        writer.write_record([
            &record.account_id,
            &record.region,
            &record.instance_name,
            &record.instance_type,
            &record.engine_type,
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> InstanceRecord {
        InstanceRecord {
            account_id: "123456789012".to_string(),
            region: "us-east-1".to_string(),
            instance_name: name.to_string(),
            instance_type: "db.t3.micro".to_string(),
            engine_type: "postgres".to_string(),
        }
    }

    fn render(records: &[InstanceRecord]) -> String {
        let mut buffer = Vec::new();
        write_records(&mut buffer, records).expect("write csv");
        String::from_utf8(buffer).expect("utf8 csv")
    }

    #[test]
    fn writes_header_without_records() {
        assert_eq!(
            render(&[]),
            "AccountId,Region,InstanceName,InstanceType,EngineType\r\n"
        );
    }

    #[test]
    fn writes_rows_in_order() {
        let csv = render(&[record("orders"), record("billing")]);
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "123456789012,us-east-1,orders,db.t3.micro,postgres");
        assert_eq!(lines[2], "123456789012,us-east-1,billing,db.t3.micro,postgres");
    }

    #[test]
    fn quotes_fields_with_delimiters() {
        let csv = render(&[record("odd,name")]);
        assert!(csv.contains(",\"odd,name\","));
    }
}
