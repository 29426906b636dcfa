//! Shared fixture for service tests: memory-backed stores plus fully
//! wired services and a frozen "now".

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use lendhub_database::memory::{
    MemoryBookingStore, MemoryCommentStore, MemoryItemStore, MemoryUserStore,
};
use lendhub_database::{BookingStore, CommentStore, ItemStore, UserStore};
use lendhub_entity::booking::{Booking, CreateBooking};
use lendhub_entity::item::{CreateItem, Item};
use lendhub_entity::user::{CreateUser, User};

use crate::booking::BookingService;
use crate::item::{AvailabilityService, CommentService, ItemService};
use crate::user::UserService;

pub(crate) struct Fixture {
    pub users: Arc<MemoryUserStore>,
    pub items: Arc<MemoryItemStore>,
    pub bookings: Arc<MemoryBookingStore>,
    pub comments: Arc<MemoryCommentStore>,
    pub user_service: UserService,
    pub item_service: ItemService,
    pub booking_service: BookingService,
    pub comment_service: CommentService,
    /// The instant all test contexts are pinned to.
    pub now: DateTime<Utc>,
    /// A user owning `item`.
    pub owner: User,
    /// A second user with no items.
    pub booker: User,
    /// An available item owned by `owner`.
    pub item: Item,
}

impl Fixture {
    pub async fn new() -> Self {
        let users = Arc::new(MemoryUserStore::new());
        let items = Arc::new(MemoryItemStore::new());
        let bookings = Arc::new(MemoryBookingStore::new(Arc::clone(&items)));
        let comments = Arc::new(MemoryCommentStore::new());

        let user_store: Arc<dyn UserStore> = users.clone();
        let item_store: Arc<dyn ItemStore> = items.clone();
        let booking_store: Arc<dyn BookingStore> = bookings.clone();
        let comment_store: Arc<dyn CommentStore> = comments.clone();

        let availability =
            AvailabilityService::new(Arc::clone(&booking_store), Arc::clone(&comment_store));
        let user_service = UserService::new(Arc::clone(&user_store));
        let item_service = ItemService::new(
            Arc::clone(&item_store),
            Arc::clone(&user_store),
            availability.clone(),
        );
        let booking_service = BookingService::new(
            Arc::clone(&booking_store),
            Arc::clone(&item_store),
            Arc::clone(&user_store),
        );
        let comment_service = CommentService::new(
            Arc::clone(&booking_store),
            Arc::clone(&item_store),
            Arc::clone(&user_store),
            Arc::clone(&comment_store),
        );

        let owner = users
            .create(&CreateUser {
                name: "owner".into(),
                email: "owner@example.com".into(),
            })
            .await
            .unwrap();
        let booker = users
            .create(&CreateUser {
                name: "booker".into(),
                email: "booker@example.com".into(),
            })
            .await
            .unwrap();
        let item = items
            .create(&CreateItem {
                owner_id: owner.id,
                name: "drill".into(),
                description: "cordless drill".into(),
                available: true,
            })
            .await
            .unwrap();

        Self {
            users,
            items,
            bookings,
            comments,
            user_service,
            item_service,
            booking_service,
            comment_service,
            now: Utc::now(),
            owner,
            booker,
            item,
        }
    }

    pub async fn add_user(&self, name: &str, email: &str) -> User {
        self.users
            .create(&CreateUser {
                name: name.into(),
                email: email.into(),
            })
            .await
            .unwrap()
    }

    pub async fn add_item(&self, owner_id: Uuid, name: &str, available: bool) -> Item {
        self.items
            .create(&CreateItem {
                owner_id,
                name: name.into(),
                description: format!("{name} description"),
                available,
            })
            .await
            .unwrap()
    }

    /// Inserts a WAITING booking whose window is offset from `now` by
    /// whole hours; negative offsets lie in the past.
    pub async fn add_booking(
        &self,
        item_id: Uuid,
        booker_id: Uuid,
        start_hours: i64,
        end_hours: i64,
    ) -> Booking {
        self.bookings
            .create(&CreateBooking {
                item_id,
                booker_id,
                start: self.now + Duration::hours(start_hours),
                end: self.now + Duration::hours(end_hours),
            })
            .await
            .unwrap()
    }
}
