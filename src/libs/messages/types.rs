//! Structured message variants for all user-facing output.
//!
//! Commands construct a `Message` and hand it to the `msg_*` macros; the
//! wording itself lives in the `Display` implementation next door.

#[derive(Debug, Clone)]
pub enum Message {
    // === CUSTOMER MESSAGES ===
    CustomerCreated(String),
    CustomerUpdated(String),
    CustomerHardDeleted(i32),
    CustomerSoftDeleted(i32),
    CustomerNotFound(String),
    CustomerRejected(String),
    CustomersHeader,
    NoCustomersFound,
    EmailAlreadyExists(String),
    ConfirmDeleteCustomer(String),
    PromptCustomerName,
    PromptCustomerEmail,
    PromptCustomerPhone,
    PromptCustomerBirthday,

    // === ROOM TYPE MESSAGES ===
    RoomTypeCreated(String),
    RoomTypeUpdated(String),
    RoomTypeDeleted(i32),
    RoomTypeNotFound(String),
    RoomTypeInUse(i32, usize), // type id, rooms referencing it
    RoomTypesHeader,
    NoRoomTypesFound,
    PromptRoomTypeName,
    PromptRoomTypeDescription,
    PromptRoomTypeNote,

    // === ROOM MESSAGES ===
    RoomCreated(String),
    RoomUpdated(String),
    RoomHardDeleted(i32),
    RoomSoftDeleted(i32),
    RoomNotFound(String),
    RoomRejected(String),
    RoomNumberAlreadyExists(String),
    RoomsHeader,
    AvailableRoomsHeader(String, String), // start, end
    NoRoomsFound,
    NoRoomsAvailable,
    ConfirmDeleteRoom(String),
    PromptRoomNumber,
    PromptRoomDescription,
    PromptRoomCapacity,
    PromptRoomPrice,
    PromptRoomTypeId,

    // === BOOKING MESSAGES ===
    BookingCreated(i32),          // reservation id
    BookingUpdated(i32),
    BookingDeleted(i32),
    BookingNotFound(i32),
    BookingRejected(String),      // rejection reason
    BookingDetailAdded(i32, i32), // reservation id, room id
    BookingDetailUpdated(i32, i32),
    BookingDetailRemoved(i32, i32),
    BookingDetailNotFound(i32, i32),
    BookingsHeader,
    BookingDetailsHeader(i32),
    NoBookingsFound,
    ConfirmDeleteBooking(i32, usize), // reservation id, detail count

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptHotelName,
    PromptCurrency,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseNeedsUpdate,
    DatabaseUpToDate,
    MigrationHistory,
    NothingToRollback,
    RollingBack(u32, u32),
    RollbackCompleted(u32),

    // === EXPORT MESSAGES ===
    ExportingData(String, String), // data type, format
    ExportCompleted(String),       // output path
    NothingToExport,

    // === VALIDATION MESSAGES ===
    InvalidDate(String),
    InvalidInterval,

    // === GENERIC MESSAGES ===
    OperationCancelled,
    Custom(String),
}
