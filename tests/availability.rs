#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use innkeep::libs::availability::{available_rooms, booked_room_ids, intervals_conflict, room_is_available};
    use innkeep::libs::booking::BookingDetail;
    use innkeep::libs::room::Room;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stay(room_id: i32, start: NaiveDate, end: NaiveDate) -> BookingDetail {
        BookingDetail {
            reservation_id: 1,
            room_id,
            start_date: start,
            end_date: end,
            actual_price: 0.0,
        }
    }

    #[test]
    fn test_half_open_overlap() {
        let a = (date(2026, 1, 1), date(2026, 1, 5));

        // Shared night
        assert!(intervals_conflict(a.0, a.1, date(2026, 1, 4), date(2026, 1, 6)));
        assert!(intervals_conflict(a.0, a.1, date(2026, 1, 2), date(2026, 1, 3)));
        // Containment both ways
        assert!(intervals_conflict(a.0, a.1, date(2025, 12, 1), date(2026, 2, 1)));
        assert!(intervals_conflict(date(2025, 12, 1), date(2026, 2, 1), a.0, a.1));
        // Identical
        assert!(intervals_conflict(a.0, a.1, a.0, a.1));

        // Check-out equals check-in: no conflict in either direction
        assert!(!intervals_conflict(a.0, a.1, date(2026, 1, 5), date(2026, 1, 7)));
        assert!(!intervals_conflict(date(2026, 1, 5), date(2026, 1, 7), a.0, a.1));
        // Fully disjoint
        assert!(!intervals_conflict(a.0, a.1, date(2026, 2, 1), date(2026, 2, 5)));
    }

    #[test]
    fn test_room_is_available_ignores_other_rooms() {
        let stays = vec![stay(1, date(2026, 1, 1), date(2026, 1, 5)), stay(2, date(2026, 1, 1), date(2026, 1, 5))];

        assert!(!room_is_available(&stays, 1, date(2026, 1, 2), date(2026, 1, 3)));
        // Room 3 has no stays at all
        assert!(room_is_available(&stays, 3, date(2026, 1, 2), date(2026, 1, 3)));
        // Room 1 is free once its stay has ended
        assert!(room_is_available(&stays, 1, date(2026, 1, 5), date(2026, 1, 8)));
    }

    #[test]
    fn test_booked_room_ids() {
        let stays = vec![
            stay(1, date(2026, 1, 1), date(2026, 1, 5)),
            stay(2, date(2026, 1, 10), date(2026, 1, 12)),
            stay(3, date(2026, 1, 4), date(2026, 1, 6)),
        ];

        let booked = booked_room_ids(&stays, date(2026, 1, 4), date(2026, 1, 5));
        assert!(booked.contains(&1));
        assert!(booked.contains(&3));
        assert!(!booked.contains(&2));
    }

    #[test]
    fn test_available_rooms_filters_booked() {
        let rooms: Vec<Room> = (1..=3).map(|n| {
            let mut room = Room::new(&format!("10{}", n), None, None, None, 1);
            room.id = Some(n);
            room
        }).collect();
        let stays = vec![stay(2, date(2026, 1, 1), date(2026, 1, 5))];

        let free = available_rooms(rooms.clone(), &stays, date(2026, 1, 2), date(2026, 1, 4));
        let free_ids: Vec<_> = free.iter().filter_map(|r| r.id).collect();
        assert_eq!(free_ids, vec![1, 3]);

        // No stays in range: everything is free
        let all = available_rooms(rooms, &stays, date(2026, 2, 1), date(2026, 2, 4));
        assert_eq!(all.len(), 3);
    }
}
