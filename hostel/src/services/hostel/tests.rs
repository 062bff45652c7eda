use std::sync::Arc;

use chrono::NaiveDate;
use hostel_core::records::{
    NewEvent, NewFee, NewFeedback, NewRoom, NewRoomRequest, NewTicket, NewUser, RequestStatus,
    RoomType,
};
use hostel_core::store::MemoryStore;
use hostel_core::{Action, HostelError, RequestContext, Role};

use super::HostelService;

async fn service() -> HostelService {
    HostelService::open(Arc::new(MemoryStore::new()), 4)
        .await
        .unwrap()
}

async fn register(service: &HostelService, user_id: &str, role: Role) -> Result<RequestContext, HostelError> {
    let profile = service
        .register(NewUser {
            user_id: Some(user_id.into()),
            name: user_id.into(),
            email: format!("{user_id}@example.com"),
            role,
            password: "secret".into(),
        })
        .await?;
    Ok(RequestContext::new(profile.user_id, profile.role))
}

#[tokio::test]
async fn test_room_request_flow() {
    let service = service().await;

    let admin = register(&service, "warden", Role::Admin).await.unwrap();
    assert!(matches!(
        register(&service, "warden2", Role::Admin).await,
        Err(HostelError::DuplicateKey(_))
    ));
    let student = register(&service, "stu001", Role::Student).await.unwrap();

    service
        .create_room(
            &admin,
            NewRoom {
                number: "101".into(),
                room_type: RoomType::Double,
                hostel_block: "A".into(),
                capacity: None,
            },
        )
        .await
        .unwrap();

    let request = service
        .request_room(
            &student,
            NewRoomRequest {
                room_number: "101".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(request.status, RequestStatus::Pending);

    // Students cannot decide their own requests
    assert_eq!(
        service
            .approve_room_request(&student, request.id, None)
            .await
            .unwrap_err(),
        HostelError::Unauthorized(Action::ApproveRoomRequest)
    );

    let approved = service
        .approve_room_request(&admin, request.id, None)
        .await
        .unwrap();
    assert_eq!(approved.status, RequestStatus::Approved);

    let room = service.get_room(&admin, "101").await.unwrap();
    assert!(room.occupants.contains(&"stu001".to_string()));

    // The student sees their own room and request only
    let own_rooms = service.list_rooms(&student).await.unwrap();
    assert_eq!(own_rooms.len(), 1);
    assert_eq!(own_rooms[0].number, "101");
    assert_eq!(service.list_room_requests(&student).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_login_by_user_id() {
    let service = service().await;
    register(&service, "stu001", Role::Student).await.unwrap();

    let user = service.login("stu001", "secret").await.unwrap();
    assert_eq!(user.role, Role::Student);
    assert_eq!(
        service.login("stu001", "nope").await.unwrap_err(),
        HostelError::InvalidCredentials
    );
}

#[tokio::test]
async fn test_fee_visibility() {
    let service = service().await;
    let admin = register(&service, "warden", Role::Admin).await.unwrap();
    let alice = register(&service, "alice1", Role::Student).await.unwrap();
    let bob = register(&service, "bob001", Role::Student).await.unwrap();

    let fee = service
        .create_fee(
            &admin,
            NewFee {
                student_id: "alice1".into(),
                amount_cents: 50_000,
                due_date: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
            },
        )
        .await
        .unwrap();

    assert_eq!(service.get_fee(&alice, fee.id).await.unwrap().id, fee.id);
    assert_eq!(
        service.get_fee(&bob, fee.id).await.unwrap_err(),
        HostelError::Unauthorized(Action::ViewOwnFee)
    );
    assert!(service.list_fees(&bob).await.unwrap().is_empty());
    assert_eq!(service.list_fees(&admin).await.unwrap().len(), 1);

    assert!(matches!(
        service.mark_fee_paid(&alice, fee.id).await,
        Err(HostelError::Unauthorized(_))
    ));
    service.mark_fee_paid(&admin, fee.id).await.unwrap();
}

#[tokio::test]
async fn test_staff_permissions() {
    let service = service().await;
    let admin = register(&service, "warden", Role::Admin).await.unwrap();
    let staff = register(&service, "staff1", Role::Staff).await.unwrap();
    let student = register(&service, "stu001", Role::Student).await.unwrap();

    service
        .create_event(
            &admin,
            NewEvent {
                title: "Movie night".into(),
                date: NaiveDate::from_ymd_opt(2026, 10, 31).unwrap(),
                description: String::new(),
            },
        )
        .await
        .unwrap();
    assert_eq!(service.list_events(&student).await.unwrap().len(), 1);
    assert!(matches!(
        service.list_events(&staff).await,
        Err(HostelError::Unauthorized(Action::ViewEvents))
    ));

    let ticket = service
        .raise_maintenance(
            &student,
            NewTicket {
                description: "Broken window".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(service.list_maintenance(&staff).await.unwrap().len(), 1);
    service
        .update_maintenance_status(
            &staff,
            ticket.id,
            hostel_core::records::TicketStatus::InProgress,
        )
        .await
        .unwrap();
    assert!(matches!(
        service.delete_maintenance(&staff, ticket.id).await,
        Err(HostelError::Unauthorized(Action::DeleteMaintenance))
    ));
    assert!(matches!(
        service.list_users(&staff).await,
        Err(HostelError::Unauthorized(Action::ListUsers))
    ));
}

#[tokio::test]
async fn test_feedback_is_scoped() {
    let service = service().await;
    let admin = register(&service, "warden", Role::Admin).await.unwrap();
    let alice = register(&service, "alice1", Role::Student).await.unwrap();
    let bob = register(&service, "bob001", Role::Student).await.unwrap();

    for (ctx, text) in [(&alice, "Great food"), (&bob, "Noisy corridor")] {
        service
            .submit_feedback(ctx, NewFeedback { text: text.into() })
            .await
            .unwrap();
    }
    assert!(matches!(
        service
            .submit_feedback(&admin, NewFeedback { text: "hi".into() })
            .await,
        Err(HostelError::Unauthorized(Action::SubmitFeedback))
    ));

    let own = service.list_feedback(&alice).await.unwrap();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].text, "Great food");
    assert_eq!(service.list_feedback(&admin).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_single_reads_do_not_reveal_existence() {
    let service = service().await;
    let admin = register(&service, "warden", Role::Admin).await.unwrap();
    let alice = register(&service, "alice1", Role::Student).await.unwrap();
    let missing = hostel_core::records::RecordId::new();

    service
        .create_room(
            &admin,
            NewRoom {
                number: "101".into(),
                room_type: RoomType::Single,
                hostel_block: "A".into(),
                capacity: None,
            },
        )
        .await
        .unwrap();

    // Someone else's room and a missing room look the same to a student
    assert_eq!(
        service.get_room(&alice, "101").await.unwrap_err(),
        HostelError::Unauthorized(Action::ViewOwnRoom)
    );
    assert_eq!(
        service.get_room(&alice, "999").await.unwrap_err(),
        HostelError::Unauthorized(Action::ViewOwnRoom)
    );
    assert_eq!(
        service.get_fee(&alice, missing).await.unwrap_err(),
        HostelError::Unauthorized(Action::ViewOwnFee)
    );

    // Admins still learn that the record is missing
    assert!(matches!(
        service.get_room(&admin, "999").await,
        Err(HostelError::NotFound(_))
    ));
    assert!(matches!(
        service.get_fee(&admin, missing).await,
        Err(HostelError::NotFound(_))
    ));
}
