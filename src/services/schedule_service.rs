//! Exam schedule service
//!
//! Owns the hall booking conflict check: for a given hall and date no two
//! live schedule entries may overlap on the half-open interval
//! `[start_time, end_time)`. Back-to-back slots are allowed.

use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::audit_actions,
    db::repositories::{CourseRepository, ExamRepository, ScheduleRepository, StaffRepository},
    error::{AppError, AppResult},
    handlers::schedules::request::{CreateScheduleRequest, UpdateScheduleRequest},
    models::{ExamSchedule, ExamScheduleDetail},
    services::audit_service::{changes_json, AuditContext, AuditService},
};

const MODEL_NAME: &str = "ExamSchedule";

/// Half-open interval overlap test
///
/// `[a_start, a_end)` and `[b_start, b_end)` overlap iff each starts before
/// the other ends. Touching endpoints do not overlap.
fn overlaps(a_start: NaiveTime, a_end: NaiveTime, b_start: NaiveTime, b_end: NaiveTime) -> bool {
    a_start < b_end && a_end > b_start
}

/// Exam schedule service
pub struct ScheduleService;

impl ScheduleService {
    /// Create a schedule entry after clash checks
    pub async fn create(
        pool: &PgPool,
        ctx: &AuditContext,
        payload: CreateScheduleRequest,
    ) -> AppResult<ExamScheduleDetail> {
        Self::check_references(
            pool,
            Some(&payload.exam_id),
            Some(&payload.subject_id),
            payload.invigilator.as_ref(),
        )
        .await?;

        Self::check_slot(
            pool,
            &payload.exam_id,
            &payload.subject_id,
            payload.date,
            payload.start_time,
            payload.end_time,
            &payload.hall_number,
            None,
        )
        .await?;

        let schedule = ScheduleRepository::create(
            pool,
            &payload.exam_id,
            &payload.subject_id,
            payload.date,
            payload.start_time,
            payload.end_time,
            &payload.hall_number,
            payload.invigilator.as_ref(),
        )
        .await?;

        AuditService::record(
            pool,
            ctx,
            audit_actions::CREATE,
            MODEL_NAME,
            Some(&schedule.id),
            changes_json(&payload),
        )
        .await?;

        Self::detail(pool, &schedule.id).await
    }

    /// Update a schedule entry, re-running clash checks on the merged record
    ///
    /// Absent fields keep their stored values, so the checks always see the
    /// full candidate slot even on a partial update.
    pub async fn update(
        pool: &PgPool,
        ctx: &AuditContext,
        id: &Uuid,
        payload: UpdateScheduleRequest,
    ) -> AppResult<ExamScheduleDetail> {
        let existing = ScheduleRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Exam schedule not found".to_string()))?;

        Self::check_references(
            pool,
            payload.exam_id.as_ref(),
            payload.subject_id.as_ref(),
            payload.invigilator.as_ref(),
        )
        .await?;

        let merged = Candidate::merged(&existing, &payload);
        Self::check_slot(
            pool,
            &merged.exam_id,
            &merged.subject_id,
            merged.date,
            merged.start_time,
            merged.end_time,
            &merged.hall_number,
            Some(id),
        )
        .await?;

        let updated = ScheduleRepository::update(
            pool,
            id,
            payload.exam_id.as_ref(),
            payload.subject_id.as_ref(),
            payload.date,
            payload.start_time,
            payload.end_time,
            payload.hall_number.as_deref(),
            payload.invigilator.as_ref(),
        )
        .await?;

        AuditService::record(
            pool,
            ctx,
            audit_actions::UPDATE,
            MODEL_NAME,
            Some(&updated.id),
            changes_json(&payload),
        )
        .await?;

        Self::detail(pool, &updated.id).await
    }

    /// Get one schedule entry with joined display names
    pub async fn get(pool: &PgPool, id: &Uuid) -> AppResult<ExamScheduleDetail> {
        Self::detail(pool, id).await
    }

    /// List schedule entries
    pub async fn list(
        pool: &PgPool,
        exam_id: Option<&Uuid>,
        subject_id: Option<&Uuid>,
        date: Option<NaiveDate>,
        search: Option<&str>,
        ordering: Option<&str>,
    ) -> AppResult<Vec<ExamScheduleDetail>> {
        ScheduleRepository::list(pool, exam_id, subject_id, date, search, ordering).await
    }

    /// Soft-delete a schedule entry
    pub async fn delete(pool: &PgPool, ctx: &AuditContext, id: &Uuid) -> AppResult<()> {
        if !ScheduleRepository::soft_delete(pool, id).await? {
            return Err(AppError::NotFound("Exam schedule not found".to_string()));
        }

        AuditService::record(pool, ctx, audit_actions::DELETE, MODEL_NAME, Some(id), None).await?;

        Ok(())
    }

    /// Run the time-range precondition and both clash checks
    #[allow(clippy::too_many_arguments)]
    async fn check_slot(
        pool: &PgPool,
        exam_id: &Uuid,
        subject_id: &Uuid,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        hall_number: &str,
        exclude: Option<&Uuid>,
    ) -> AppResult<()> {
        if end_time <= start_time {
            return Err(AppError::validation("End time must be after start time"));
        }

        if ScheduleRepository::slot_exists(pool, exam_id, subject_id, date, start_time, exclude)
            .await?
        {
            return Err(AppError::validation(
                "Schedule already exists for this exam, subject and slot",
            ));
        }

        let booked =
            ScheduleRepository::find_for_hall_and_date(pool, hall_number, date, exclude).await?;

        if booked
            .iter()
            .any(|s| overlaps(s.start_time, s.end_time, start_time, end_time))
        {
            return Err(AppError::validation(
                "Hall is already booked for this time slot",
            ));
        }

        Ok(())
    }

    /// Verify provided references point at live rows
    async fn check_references(
        pool: &PgPool,
        exam_id: Option<&Uuid>,
        subject_id: Option<&Uuid>,
        invigilator: Option<&Uuid>,
    ) -> AppResult<()> {
        if let Some(exam_id) = exam_id {
            if ExamRepository::find_by_id(pool, exam_id).await?.is_none() {
                return Err(AppError::field("exam_id", "Exam not found"));
            }
        }

        if let Some(subject_id) = subject_id {
            if CourseRepository::find_by_id(pool, subject_id).await?.is_none() {
                return Err(AppError::field("subject_id", "Subject not found"));
            }
        }

        if let Some(invigilator) = invigilator {
            if StaffRepository::find_by_id(pool, invigilator).await?.is_none() {
                return Err(AppError::field("invigilator", "Staff member not found"));
            }
        }

        Ok(())
    }

    async fn detail(pool: &PgPool, id: &Uuid) -> AppResult<ExamScheduleDetail> {
        ScheduleRepository::find_detail_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Exam schedule not found".to_string()))
    }
}

/// Fully merged candidate slot for an update
struct Candidate {
    exam_id: Uuid,
    subject_id: Uuid,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    hall_number: String,
}

impl Candidate {
    fn merged(existing: &ExamSchedule, payload: &UpdateScheduleRequest) -> Self {
        Self {
            exam_id: payload.exam_id.unwrap_or(existing.exam_id),
            subject_id: payload.subject_id.unwrap_or(existing.subject_id),
            date: payload.date.unwrap_or(existing.date),
            start_time: payload.start_time.unwrap_or(existing.start_time),
            end_time: payload.end_time.unwrap_or(existing.end_time),
            hall_number: payload
                .hall_number
                .clone()
                .unwrap_or_else(|| existing.hall_number.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_overlapping_intervals_conflict() {
        // Existing 09:00-11:00 vs candidate 10:00-12:00
        assert!(overlaps(t(9, 0), t(11, 0), t(10, 0), t(12, 0)));
    }

    #[test]
    fn test_contained_interval_conflicts() {
        assert!(overlaps(t(9, 0), t(12, 0), t(10, 0), t(11, 0)));
        assert!(overlaps(t(10, 0), t(11, 0), t(9, 0), t(12, 0)));
    }

    #[test]
    fn test_identical_intervals_conflict() {
        assert!(overlaps(t(9, 0), t(11, 0), t(9, 0), t(11, 0)));
    }

    #[test]
    fn test_back_to_back_slots_do_not_conflict() {
        // Half-open semantics: existing ends exactly when the candidate starts
        assert!(!overlaps(t(9, 0), t(11, 0), t(11, 0), t(12, 0)));
        assert!(!overlaps(t(11, 0), t(12, 0), t(9, 0), t(11, 0)));
    }

    #[test]
    fn test_disjoint_intervals_do_not_conflict() {
        assert!(!overlaps(t(9, 0), t(10, 0), t(14, 0), t(16, 0)));
    }
}
