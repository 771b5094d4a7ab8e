#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
    use spot_price_dashboard::hooks::use_prices::DataState;
    use spot_price_dashboard::models::{
        chart::{ChartDescription, SeriesKind},
        error::AppError,
        prices::{PriceRecord, Prices, WireRecord, normalize, parse_response},
    };
    use spot_price_dashboard::services::storage::{
        KeyValueStore, LocalSettings, MemoryStore, PersistedSetting,
    };
    use spot_price_dashboard::utils::{
        price_math::{calculate_tax, format_display_price},
        time_format::{format_date_time, is_next_day_visible, is_now_at},
    };
    use std::rc::Rc;

    fn helsinki() -> FixedOffset {
        FixedOffset::east_opt(2 * 3600).unwrap()
    }

    // Helper function to create a day of hourly wire records starting at local midnight
    fn create_wire_day(y: i32, m: u32, d: u32) -> Vec<WireRecord> {
        let midnight = helsinki().with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap();
        (0..24_i32)
            .map(|h| WireRecord {
                price: 30.0 + f64::from(h) * 5.0,
                start: (midnight + Duration::hours(i64::from(h))).to_rfc3339(),
                end: (midnight + Duration::hours(i64::from(h) + 1)).to_rfc3339(),
            })
            .collect()
    }

    fn create_records(start: DateTime<FixedOffset>, prices: &[f64]) -> Vec<PriceRecord> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| PriceRecord {
                price,
                start: (start + Duration::hours(i as i64)).with_timezone(&Utc),
                end: (start + Duration::hours(i as i64 + 1)).with_timezone(&Utc),
            })
            .collect()
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_display() {
        let error = AppError::MalformedResponse("not an array".to_string());
        assert_eq!(error.to_string(), "Malformed response: not an array");

        let error = AppError::EnvironmentUnavailable("no window".to_string());
        assert_eq!(error.to_string(), "Environment unavailable: no window");
    }

    // ===== Wire Format Tests =====

    #[test]
    fn test_wire_record_deserialization() {
        let json = r#"{"p": 42.17, "s": "2025-03-26T10:00:00Z", "e": "2025-03-26T11:00:00Z"}"#;

        let record: WireRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.price, 42.17);
        assert_eq!(record.start, "2025-03-26T10:00:00Z");
    }

    #[test]
    fn test_normalizer_round_trip_keeps_count_and_order() {
        let wire = create_wire_day(2025, 12, 7);
        let body = serde_json::to_string(&wire).unwrap();

        let records = parse_response(&body).unwrap();
        assert_eq!(records.len(), wire.len());
        assert!(records.windows(2).all(|w| w[0].start < w[1].start));
        assert!(records.windows(2).all(|w| w[0].end == w[1].start));

        let labels: Vec<String> = records
            .iter()
            .map(|r| format_date_time(&r.start.with_timezone(&helsinki())))
            .collect();
        assert_eq!(labels.len(), 24);
        assert_eq!(labels[0], "0");
        assert_eq!(labels[13], "13");
    }

    #[test]
    fn test_normalize_rejects_bad_timestamps() {
        let mut wire = create_wire_day(2025, 12, 7);
        wire[5].end = "26.3.2025 klo 11".to_string();
        assert!(matches!(normalize(wire), Err(AppError::MalformedResponse(_))));
    }

    // ===== Price Math Tests =====

    #[test]
    fn test_tax_inclusive_price() {
        let price = 6.73;
        assert_abs_diff_eq!(price + calculate_tax(price), 8.45, epsilon = 0.01);
        assert_eq!(format_display_price(67.3), "8.45");
    }

    // ===== Time Window Tests =====

    #[test]
    fn test_is_now_boundaries() {
        let start = helsinki().with_ymd_and_hms(2025, 12, 7, 8, 0, 0).unwrap();
        let record = &create_records(start, &[50.0])[0];

        assert!(is_now_at(record, &helsinki().with_ymd_and_hms(2025, 12, 7, 8, 30, 0).unwrap()));
        assert!(!is_now_at(record, &helsinki().with_ymd_and_hms(2025, 12, 7, 9, 0, 0).unwrap()));
    }

    #[test]
    fn test_next_day_visibility_cutoff() {
        let now = helsinki().with_ymd_and_hms(2025, 12, 7, 10, 0, 0).unwrap();
        let before_cutoff = helsinki().with_ymd_and_hms(2025, 12, 8, 2, 0, 0).unwrap();
        let at_cutoff = helsinki().with_ymd_and_hms(2025, 12, 8, 3, 0, 0).unwrap();

        assert!(!is_next_day_visible(&create_records(before_cutoff, &[1.0]), &now));
        assert!(is_next_day_visible(&create_records(at_cutoff, &[1.0]), &now));
    }

    // ===== Chart Description Tests =====

    #[test]
    fn test_chart_from_fetched_day() {
        let records = normalize(create_wire_day(2025, 12, 7)).unwrap();
        let now = helsinki().with_ymd_and_hms(2025, 12, 7, 12, 15, 0).unwrap();
        let chart = ChartDescription::build(&records, &now);

        assert_eq!(chart.labels.len(), 24);
        for series in &chart.series {
            assert_eq!(series.data.len(), 24);
            assert_eq!(series.colors.len(), 24);
            assert_eq!(series.annotations.len(), 24);
        }

        let current = chart.series(SeriesKind::Now).unwrap();
        let highlighted: Vec<usize> = current
            .data
            .iter()
            .enumerate()
            .filter(|(_, v)| **v > 0.0)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(highlighted, vec![12]);

        let day_change = chart.series(SeriesKind::DayChange).unwrap();
        assert_eq!(day_change.annotations[0].as_deref(), Some("7.12.2025"));
    }

    #[test]
    fn test_chart_empty_input() {
        let now = Utc::now();
        let chart = ChartDescription::build(&[], &now);

        assert!(chart.labels.is_empty());
        assert!(chart.series.iter().all(|s| s.data.is_empty()));
        assert!(serde_json::to_string(&chart).is_ok());
    }

    // ===== Persisted Setting Tests =====

    #[test]
    fn test_setting_visible_to_later_instance() {
        let store: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::new());

        let mut first = LocalSettings::load(store.clone());
        assert!(!*first.show_only_after_now.value());
        first.show_only_after_now.set(true).unwrap();

        let second = PersistedSetting::new(store, "showOnlyAfterNow", false);
        assert!(*second.value());
    }

    // ===== DataState Tests =====

    #[test]
    fn test_data_state_data_extraction() {
        let prices = Rc::new(Prices::new(normalize(create_wire_day(2025, 12, 7)).unwrap()));
        let loaded = DataState::Loaded(prices.clone());

        assert!(loaded.data().is_some());
        assert_eq!(loaded.data().unwrap(), &prices);
        assert!(DataState::Loading.is_loading());
        assert!(DataState::Error("Test error".to_string()).data().is_none());
    }

    #[test]
    fn test_data_state_from_result() {
        let result: Result<Prices, AppError> = Err(AppError::NotFound("2025-12-07".to_string()));
        let state = DataState::from(result);
        assert_eq!(state, DataState::Error("Not found: 2025-12-07".to_string()));

        let state = DataState::from(Ok::<_, AppError>(Prices::default()));
        assert_eq!(state.data().map(|p| p.is_empty()), Some(true));
    }
}
