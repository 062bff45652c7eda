use chrono::Utc;
use tracing::{info, instrument};

use super::{find_user, Collection};
use crate::error::{HostelError, Result};
use crate::policy::Role;
use crate::records::{require, MaintenanceTicket, NewTicket, RecordId, TicketStatus, User};
use crate::store::{Filter, SharedStore};

#[derive(Debug, Clone)]
pub struct MaintenanceRepository {
    tickets: Collection<MaintenanceTicket>,
    users: Collection<User>,
}

impl MaintenanceRepository {
    pub fn new(store: SharedStore) -> Self {
        Self {
            tickets: Collection::new(store.clone()),
            users: Collection::new(store),
        }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, raised_by: &str, ticket: NewTicket) -> Result<MaintenanceTicket> {
        require("description", &ticket.description)?;
        let record = MaintenanceTicket {
            id: RecordId::new(),
            raised_by: raised_by.to_string(),
            description: ticket.description.trim().to_string(),
            status: TicketStatus::Open,
            assigned_staff: None,
            created_at: Utc::now(),
        };
        self.tickets.create(&record).await?;
        Ok(record)
    }

    pub async fn get(&self, id: RecordId) -> Result<MaintenanceTicket> {
        self.tickets.get(id).await
    }

    /// Tickets newest first, optionally only those raised by one user
    pub async fn list(&self, raised_by: Option<&str>) -> Result<Vec<MaintenanceTicket>> {
        let filter = match raised_by {
            Some(user_id) => Filter::all().eq("raisedBy", user_id),
            None => Filter::all(),
        };
        let mut tickets = self.tickets.list(&filter).await?;
        tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tickets)
    }

    pub async fn update(&self, id: RecordId, status: TicketStatus) -> Result<MaintenanceTicket> {
        self.tickets.transition(id, status).await
    }

    #[instrument(skip(self))]
    pub async fn assign_staff(&self, id: RecordId, staff_id: &str) -> Result<MaintenanceTicket> {
        let mut ticket = self.get(id).await?;
        let staff = find_user(&self.users, staff_id).await?;
        if staff.role != Role::Staff {
            return Err(HostelError::InvalidInput(format!(
                "{staff_id} is not a staff member"
            )));
        }
        ticket.assigned_staff = Some(staff.user_id);
        self.tickets.save(&ticket).await?;
        info!("Ticket {} assigned to {}", id, staff_id);
        Ok(ticket)
    }

    pub async fn delete(&self, id: RecordId) -> Result<()> {
        self.tickets.delete(id).await
    }
}
