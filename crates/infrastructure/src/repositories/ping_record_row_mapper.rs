use jping_domain::PingRecord;

pub(crate) type PingRecordRow = (String, String, String, i64);

pub(crate) const PING_RECORD_SELECT_BY_HOSTNAME: &str =
    "SELECT hostname, interface, ip_address, ping_result
     FROM jping WHERE hostname = ? ORDER BY rowid";

pub(crate) const PING_RECORD_UPSERT: &str =
    "INSERT INTO jping (ip_address, interface, hostname, ping_result)
     VALUES (?, ?, ?, ?)
     ON CONFLICT(ip_address, hostname) DO UPDATE SET
         interface = excluded.interface,
         ping_result = excluded.ping_result";

pub(crate) fn row_to_record(row: PingRecordRow) -> PingRecord {
    let (hostname, interface, ip_address, ping_result) = row;

    PingRecord {
        hostname,
        interface,
        ip_address,
        ping_result: ping_result != 0,
    }
}
