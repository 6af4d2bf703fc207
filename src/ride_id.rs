use chrono::{DateTime, Local, TimeZone};
use uuid::Uuid;

/// Offset between the Gregorian epoch (1582-10-15) and the Unix epoch,
/// in 100-nanosecond ticks.
pub const GREGORIAN_UNIX_OFFSET_TICKS: u64 = 0x01b2_1dd2_1381_4000;

const TICKS_PER_SECOND: u64 = 10_000_000;

pub fn generate(node_id: &[u8; 6]) -> Uuid {
    Uuid::now_v1(node_id)
}

/// Derives the request time from the ride id instead of reading the wall
/// clock again, so the id and the timestamp can never disagree.
pub fn request_time(id: &Uuid) -> Option<DateTime<Local>> {
    if id.get_version_num() != 1 {
        return None;
    }

    let since_unix = gregorian_ticks(id).checked_sub(GREGORIAN_UNIX_OFFSET_TICKS)?;
    let secs = (since_unix / TICKS_PER_SECOND) as i64;
    let nanos = ((since_unix % TICKS_PER_SECOND) * 100) as u32;

    Local.timestamp_opt(secs, nanos).single()
}

pub fn format_request_time(time: DateTime<Local>) -> String {
    time.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}

/// 60-bit Gregorian tick count embedded in a v1 UUID.
fn gregorian_ticks(id: &Uuid) -> u64 {
    let bytes = id.as_bytes();
    let time_low = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as u64;
    let time_mid = u16::from_be_bytes([bytes[4], bytes[5]]) as u64;
    let time_hi = (u16::from_be_bytes([bytes[6], bytes[7]]) & 0x0fff) as u64;

    time_hi << 48 | time_mid << 32 | time_low
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::{GREGORIAN_UNIX_OFFSET_TICKS, format_request_time, generate, request_time};

    fn uuid_with_ticks(ticks: u64) -> Uuid {
        let time_low = ticks as u32;
        let time_mid = (ticks >> 32) as u16;
        let time_hi_and_version = ((ticks >> 48) as u16 & 0x0fff) | 0x1000;

        Uuid::from_fields(
            time_low,
            time_mid,
            time_hi_and_version,
            &[0x80, 0x00, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05],
        )
    }

    #[test]
    fn derives_epoch_seconds_from_embedded_ticks() {
        let ticks = GREGORIAN_UNIX_OFFSET_TICKS + 1_600_000_000 * 10_000_000 + 1_234_567;
        let derived = request_time(&uuid_with_ticks(ticks)).unwrap();

        assert_eq!(derived.timestamp(), 1_600_000_000);
        assert_eq!(derived.timestamp_subsec_nanos(), 123_456_700);
    }

    #[test]
    fn pre_unix_epoch_ticks_yield_none() {
        assert!(request_time(&uuid_with_ticks(0)).is_none());
    }

    #[test]
    fn non_time_based_ids_yield_none() {
        assert!(request_time(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn generated_id_timestamp_tracks_the_clock() {
        let id = generate(&[0, 1, 2, 3, 4, 5]);
        assert_eq!(id.get_version_num(), 1);

        let derived = request_time(&id).unwrap();
        let now = chrono::Local::now();
        assert!((now.timestamp() - derived.timestamp()).abs() <= 1);
    }

    #[test]
    fn formatted_time_is_iso_like() {
        let ticks = GREGORIAN_UNIX_OFFSET_TICKS + 1_600_000_000 * 10_000_000;
        let formatted = format_request_time(request_time(&uuid_with_ticks(ticks)).unwrap());

        assert_eq!(formatted.len(), "2020-09-13 12:26:40.000000".len());
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[10..11], " ");
    }
}
