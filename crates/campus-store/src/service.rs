//! Service layer: one entity list per record kind behind a single
//! capability check per operation.
//!
//! `CampusService` owns the explicit [`SessionContext`] and every
//! [`EntityList`]. Generic CRUD lives here; domain operations that set
//! computed fields are added as `impl CampusService` blocks in
//! [`crate::repos`].

use std::fmt;
use std::sync::Arc;

use campus_core::access;
use campus_core::clock::Clock;
use campus_core::entities::{
    Book, ExamSchedule, FeeStructure, GalleryItem, LeaveRequest, Notice, SalaryRecord, Student,
    StudentFeeRecord, Teacher, TimetableEntry,
};
use campus_core::enums::{Action, EntityType};
use campus_core::identity::{SessionContext, User};
use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::StoreError;
use crate::list::EntityList;
use crate::query::Query;
use crate::record::Record;
use crate::seed;

/// A record kind the service holds a list for.
pub trait Collection: Record {
    fn list(service: &CampusService) -> &EntityList<Self>;

    fn list_mut(service: &mut CampusService) -> &mut EntityList<Self>;

    /// Fill denormalised draft fields from other collections before the
    /// draft is validated. Most records have none.
    fn resolve(_service: &CampusService, draft: &Self::Draft) -> Self::Draft {
        draft.clone()
    }
}

pub struct CampusService {
    session: SessionContext,
    clock: Arc<dyn Clock>,
    pub(crate) students: EntityList<Student>,
    pub(crate) teachers: EntityList<Teacher>,
    pub(crate) fee_structures: EntityList<FeeStructure>,
    pub(crate) fee_records: EntityList<StudentFeeRecord>,
    pub(crate) salaries: EntityList<SalaryRecord>,
    pub(crate) books: EntityList<Book>,
    pub(crate) exams: EntityList<ExamSchedule>,
    pub(crate) timetable: EntityList<TimetableEntry>,
    pub(crate) notices: EntityList<Notice>,
    pub(crate) gallery: EntityList<GalleryItem>,
    pub(crate) leave_requests: EntityList<LeaveRequest>,
}

impl fmt::Debug for CampusService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CampusService")
            .field("session", &self.session)
            .field("today", &self.clock.today())
            .finish_non_exhaustive()
    }
}

impl CampusService {
    /// A signed-out service with empty collections.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            session: SessionContext::new(),
            students: EntityList::new(Arc::clone(&clock)),
            teachers: EntityList::new(Arc::clone(&clock)),
            fee_structures: EntityList::new(Arc::clone(&clock)),
            fee_records: EntityList::new(Arc::clone(&clock)),
            salaries: EntityList::new(Arc::clone(&clock)),
            books: EntityList::new(Arc::clone(&clock)),
            exams: EntityList::new(Arc::clone(&clock)),
            timetable: EntityList::new(Arc::clone(&clock)),
            notices: EntityList::new(Arc::clone(&clock)),
            gallery: EntityList::new(Arc::clone(&clock)),
            leave_requests: EntityList::new(Arc::clone(&clock)),
            clock,
        }
    }

    /// A signed-out service loaded with the demo school.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the bundled demo data does not parse or
    /// contains duplicate ids.
    pub fn seeded(clock: Arc<dyn Clock>) -> Result<Self, StoreError> {
        let data = seed::load(clock.today())?;
        Ok(Self {
            session: SessionContext::new(),
            students: EntityList::with_records(data.students, Arc::clone(&clock))?,
            teachers: EntityList::with_records(data.teachers, Arc::clone(&clock))?,
            fee_structures: EntityList::with_records(data.fee_structures, Arc::clone(&clock))?,
            fee_records: EntityList::with_records(data.fee_records, Arc::clone(&clock))?,
            salaries: EntityList::with_records(data.salaries, Arc::clone(&clock))?,
            books: EntityList::with_records(data.books, Arc::clone(&clock))?,
            exams: EntityList::with_records(data.exams, Arc::clone(&clock))?,
            timetable: EntityList::with_records(data.timetable, Arc::clone(&clock))?,
            notices: EntityList::with_records(data.notices, Arc::clone(&clock))?,
            gallery: EntityList::with_records(data.gallery, Arc::clone(&clock))?,
            leave_requests: EntityList::with_records(data.leave_requests, Arc::clone(&clock))?,
            clock,
        })
    }

    // -- session --------------------------------------------------------

    pub fn login(&mut self, user: User) {
        info!(user = %user.id, role = %user.role, "session started");
        self.session.init(user);
    }

    pub fn logout(&mut self) {
        self.session.clear();
    }

    #[must_use]
    pub const fn session(&self) -> &SessionContext {
        &self.session
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Check that the signed-in user may perform `action` on `entity`.
    ///
    /// # Errors
    ///
    /// `StoreError::NotAuthenticated` with an empty session, otherwise
    /// `StoreError::Forbidden` when the role lacks the capability.
    pub fn authorize(&self, action: Action, entity: EntityType) -> Result<&User, StoreError> {
        let Ok(user) = self.session.require_user() else {
            warn!(%action, %entity, "refused: not signed in");
            return Err(StoreError::NotAuthenticated);
        };
        if !access::can(user.role, action, entity) {
            warn!(role = %user.role, %action, %entity, "refused: missing capability");
            return Err(StoreError::Forbidden {
                role: user.role,
                action,
                entity,
            });
        }
        Ok(user)
    }

    // -- generic CRUD ---------------------------------------------------

    /// # Errors
    ///
    /// Authorization errors, or `StoreError::NotFound`.
    pub fn get<R: Collection>(&self, id: &str) -> Result<&R, StoreError> {
        self.authorize(Action::View, R::ENTITY)?;
        R::list(self).find(id)
    }

    /// Every record in canonical order.
    ///
    /// # Errors
    ///
    /// Authorization errors.
    pub fn list<R: Collection>(&self) -> Result<&[R], StoreError> {
        self.authorize(Action::View, R::ENTITY)?;
        Ok(R::list(self).as_slice())
    }

    /// Start a read-only query. The capability is checked here, once.
    ///
    /// # Errors
    ///
    /// Authorization errors.
    pub fn query<R: Collection>(&self) -> Result<Query<'_, R>, StoreError> {
        self.authorize(Action::View, R::ENTITY)?;
        Ok(R::list(self).query())
    }

    /// # Errors
    ///
    /// Authorization errors, or `StoreError::Validation` with every failed
    /// field.
    pub fn create<R: Collection>(&mut self, draft: &R::Draft) -> Result<R, StoreError> {
        self.authorize(Action::Create, R::ENTITY)?;
        let draft = R::resolve(self, draft);
        R::list_mut(self).create(&draft)
    }

    /// # Errors
    ///
    /// Authorization errors, `StoreError::NotFound`, or
    /// `StoreError::Validation`.
    pub fn update<R: Collection>(&mut self, id: &str, draft: &R::Draft) -> Result<R, StoreError> {
        self.authorize(Action::Update, R::ENTITY)?;
        let draft = R::resolve(self, draft);
        R::list_mut(self).update(id, &draft)
    }

    /// # Errors
    ///
    /// Authorization errors, or `StoreError::NotFound`.
    pub fn delete<R: Collection>(&mut self, id: &str) -> Result<R, StoreError> {
        self.authorize(Action::Delete, R::ENTITY)?;
        R::list_mut(self).delete(id)
    }
}

macro_rules! collection {
    ($($record:ty => $field:ident),+ $(,)?) => {
        $(
            impl Collection for $record {
                fn list(service: &CampusService) -> &EntityList<Self> {
                    &service.$field
                }

                fn list_mut(service: &mut CampusService) -> &mut EntityList<Self> {
                    &mut service.$field
                }
            }
        )+
    };
}

// SalaryRecord resolves its teacher name; see `repos::salary`.
collection! {
    Student => students,
    Teacher => teachers,
    FeeStructure => fee_structures,
    StudentFeeRecord => fee_records,
    Book => books,
    ExamSchedule => exams,
    TimetableEntry => timetable,
    Notice => notices,
    GalleryItem => gallery,
    LeaveRequest => leave_requests,
}
