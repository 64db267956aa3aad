//! Availability service: free windows for a date, and reserving one of them.

use chrono::NaiveDate;

use beautycare_domain::availability::available_windows;
use beautycare_domain::booking::Booking;
use beautycare_domain::error::{BeautyCareError, ConflictError};
use beautycare_domain::slot::Slot;

use crate::ports::{BookingRepository, SlotRepository};

/// Result of one availability lookup.
///
/// `sequence` is the number the caller attached to its request, echoed back
/// untouched. A caller with several lookups in flight keeps the response
/// carrying the highest number it has issued and drops the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityLookup {
    pub sequence: u64,
    pub date: NaiveDate,
    pub slots: Vec<Slot>,
}

/// Computes bookable windows by diffing configured slots against bookings.
///
/// Nothing is cached: every lookup reads both tables again.
pub struct AvailabilityService<S, B> {
    slots: S,
    bookings: B,
}

impl<S, B> AvailabilityService<S, B>
where
    S: SlotRepository,
    B: BookingRepository,
{
    pub fn new(slots: S, bookings: B) -> Self {
        Self { slots, bookings }
    }

    /// Windows still open on `date`, in the order the datastore returned
    /// the slots.
    ///
    /// # Errors
    ///
    /// Returns a storage error when either read fails; no partial result is
    /// produced.
    pub async fn windows(&self, date: NaiveDate) -> Result<Vec<Slot>, BeautyCareError> {
        let slots = self.slots.find_open_by_date(date).await?;
        let bookings = self.bookings.find_by_date(date).await?;
        Ok(available_windows(slots, &bookings))
    }

    /// Same as [`Self::windows`], tagged with the caller's request `sequence`.
    ///
    /// # Errors
    ///
    /// Returns a storage error when either read fails.
    pub async fn lookup(
        &self,
        date: NaiveDate,
        sequence: u64,
    ) -> Result<AvailabilityLookup, BeautyCareError> {
        let slots = self.windows(date).await?;
        tracing::debug!(sequence, %date, available = slots.len(), "availability computed");
        Ok(AvailabilityLookup {
            sequence,
            date,
            slots,
        })
    }

    /// Insert `booking` if its start time is still free.
    ///
    /// The check and the insert are not atomic; two visitors racing for the
    /// same window can both pass the check. Adapters backed by a unique
    /// constraint turn the loser's insert into a conflict as well.
    ///
    /// # Errors
    ///
    /// Returns [`BeautyCareError::Conflict`] when the start time is not an
    /// open window, or a storage error from either repository.
    pub async fn reserve(&self, booking: Booking) -> Result<Booking, BeautyCareError> {
        let open = self
            .windows(booking.booking_date)
            .await?
            .iter()
            .any(|slot| slot.start_time == booking.booking_time);
        if !open {
            return Err(ConflictError::SlotUnavailable {
                date: booking.booking_date,
                time: booking.booking_time,
            }
            .into());
        }
        self.bookings.create(booking).await
    }
}

#[cfg(test)]
impl<S, B> AvailabilityService<S, B> {
    pub(crate) fn bookings(&self) -> &B {
        &self.bookings
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::NaiveTime;

    use beautycare_domain::booking::BookingRequest;

    #[derive(Default)]
    pub(crate) struct InMemorySlots {
        pub slots: Mutex<Vec<Slot>>,
        pub fail: bool,
    }

    impl SlotRepository for InMemorySlots {
        fn find_open_by_date(
            &self,
            date: NaiveDate,
        ) -> impl Future<Output = Result<Vec<Slot>, BeautyCareError>> + Send {
            let result = if self.fail {
                Err(BeautyCareError::storage(std::io::Error::other("slots offline")))
            } else {
                Ok(self
                    .slots
                    .lock()
                    .unwrap()
                    .iter()
                    .filter(|s| s.slot_date == date && !s.is_blocked)
                    .cloned()
                    .collect())
            };
            async { result }
        }
    }

    /// Counts every call so tests can assert that no IO happened.
    #[derive(Default)]
    pub(crate) struct InMemoryBookings {
        pub bookings: Mutex<Vec<Booking>>,
        pub calls: AtomicUsize,
        pub fail_reads: bool,
        pub fail_writes: bool,
    }

    impl BookingRepository for InMemoryBookings {
        fn create(
            &self,
            booking: Booking,
        ) -> impl Future<Output = Result<Booking, BeautyCareError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let result = if self.fail_writes {
                Err(BeautyCareError::storage(std::io::Error::other("insert rejected")))
            } else {
                self.bookings.lock().unwrap().push(booking.clone());
                Ok(booking)
            };
            async { result }
        }

        fn find_by_date(
            &self,
            date: NaiveDate,
        ) -> impl Future<Output = Result<Vec<Booking>, BeautyCareError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let result = if self.fail_reads {
                Err(BeautyCareError::storage(std::io::Error::other("bookings offline")))
            } else {
                Ok(self
                    .bookings
                    .lock()
                    .unwrap()
                    .iter()
                    .filter(|b| b.booking_date == date)
                    .cloned()
                    .collect())
            };
            async { result }
        }
    }

    pub(crate) fn at(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    pub(crate) fn slots_on(date: NaiveDate, hours: &[u32]) -> InMemorySlots {
        InMemorySlots {
            slots: Mutex::new(
                hours
                    .iter()
                    .map(|&h| Slot::open(date, at(h), at(h + 1)).unwrap())
                    .collect(),
            ),
            fail: false,
        }
    }

    pub(crate) fn booking(date: NaiveDate, h: u32) -> Booking {
        BookingRequest {
            customer_name: "Kavya".to_string(),
            phone: "9811111111".to_string(),
            booking_date: Some(date),
            booking_time: Some(at(h)),
            ..BookingRequest::default()
        }
        .into_booking("Haircut".to_string())
        .unwrap()
    }

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[tokio::test]
    async fn should_list_two_windows_when_middle_one_is_booked() {
        let bookings = InMemoryBookings::default();
        bookings.bookings.lock().unwrap().push(booking(june_first(), 10));
        let svc = AvailabilityService::new(slots_on(june_first(), &[9, 10, 11]), bookings);

        let windows = svc.windows(june_first()).await.unwrap();
        let labels: Vec<String> = windows.iter().map(Slot::label).collect();
        assert_eq!(labels, vec!["09:00-10:00", "11:00-12:00"]);
    }

    #[tokio::test]
    async fn should_echo_caller_sequence_when_newer_request_completes_first() {
        let june_second = june_first().succ_opt().unwrap();
        let slots = slots_on(june_first(), &[9]);
        slots
            .slots
            .lock()
            .unwrap()
            .push(Slot::open(june_second, at(14), at(15)).unwrap());
        let svc = AvailabilityService::new(slots, InMemoryBookings::default());

        // June 1 was requested first (1) but answers after June 2 (2).
        let newer = svc.lookup(june_second, 2).await.unwrap();
        let stale = svc.lookup(june_first(), 1).await.unwrap();

        assert_eq!(newer.sequence, 2);
        assert_eq!(stale.sequence, 1);
        let kept = [newer, stale]
            .into_iter()
            .max_by_key(|lookup| lookup.sequence)
            .unwrap();
        assert_eq!(kept.date, june_second);
        assert_eq!(kept.slots[0].start_time, at(14));
    }

    #[tokio::test]
    async fn should_fail_whole_lookup_when_bookings_unreadable() {
        let svc = AvailabilityService::new(
            slots_on(june_first(), &[9, 10]),
            InMemoryBookings {
                fail_reads: true,
                ..InMemoryBookings::default()
            },
        );
        assert!(matches!(
            svc.lookup(june_first(), 1).await,
            Err(BeautyCareError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn should_return_empty_for_unconfigured_date() {
        let svc = AvailabilityService::new(InMemorySlots::default(), InMemoryBookings::default());
        assert!(svc.windows(june_first()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_reservation_of_taken_window() {
        let bookings = InMemoryBookings::default();
        bookings.bookings.lock().unwrap().push(booking(june_first(), 9));
        let svc = AvailabilityService::new(slots_on(june_first(), &[9, 10]), bookings);

        let result = svc.reserve(booking(june_first(), 9)).await;
        assert!(matches!(
            result,
            Err(BeautyCareError::Conflict(ConflictError::SlotUnavailable { .. }))
        ));
    }

    #[tokio::test]
    async fn should_reject_reservation_outside_configured_slots() {
        let svc = AvailabilityService::new(
            slots_on(june_first(), &[9, 10]),
            InMemoryBookings::default(),
        );
        let result = svc.reserve(booking(june_first(), 15)).await;
        assert!(matches!(result, Err(BeautyCareError::Conflict(_))));
    }

    #[tokio::test]
    async fn should_reserve_free_window() {
        let svc = AvailabilityService::new(
            slots_on(june_first(), &[9, 10]),
            InMemoryBookings::default(),
        );
        svc.reserve(booking(june_first(), 10)).await.unwrap();

        let windows = svc.windows(june_first()).await.unwrap();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].start_time, at(9));
    }
}
