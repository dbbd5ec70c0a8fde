use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(ToSchema)]
pub struct NewRoomDoc { pub description: String, pub price: i32 }

#[derive(ToSchema)]
pub struct RoomDoc { pub room_id: i32, pub description: String, pub price: i32 }

#[derive(ToSchema)]
pub struct CreatedRoomDoc { pub room_id: i32 }

#[derive(ToSchema)]
pub struct NewBookingDoc {
    pub room_id: i32,
    /// `YYYY-MM-DD`
    #[schema(example = "2021-01-05")]
    pub date_start: String,
    /// `YYYY-MM-DD`, strictly after `date_start`
    #[schema(example = "2021-01-08")]
    pub date_end: String,
}

#[derive(ToSchema)]
pub struct BookingDoc {
    pub booking_id: i32,
    pub room_id: i32,
    #[schema(example = "2021-01-05")]
    pub date_start: String,
    #[schema(example = "2021-01-08")]
    pub date_end: String,
}

#[derive(ToSchema)]
pub struct CreatedBookingDoc { pub booking_id: i32 }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::rooms::create,
        crate::rooms::list,
        crate::rooms::get,
        crate::rooms::delete,
        crate::bookings::create,
        crate::bookings::list,
        crate::bookings::get,
        crate::bookings::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            NewRoomDoc,
            RoomDoc,
            CreatedRoomDoc,
            NewBookingDoc,
            BookingDoc,
            CreatedBookingDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "rooms"),
        (name = "bookings")
    )
)]
pub struct ApiDoc;
