use serde::Serialize;

/// Spreadsheet column binding, in sheet order (A–L).
///
/// `Participant::from_cells`, `Participant::cells` and both the header and
/// body rows of `index.html` walk this list; reordering it moves the sheet
/// binding and the rendered table together.
pub const COLUMNS: [Column; 12] = [
    Column::new("A", "Timestamp", Field::Timestamp),
    Column::new("B", "Nomor Pendaftaran", Field::RegistrationNumber),
    Column::new("C", "Token", Field::Token),
    Column::new("D", "Email Address", Field::EmailAddress),
    Column::new("E", "Nama Tim", Field::TeamName),
    Column::new("F", "Nama Lengkap Leader", Field::LeaderFullName),
    Column::new("G", "Nomor WhatsApp Aktif Leader", Field::LeaderWhatsapp),
    Column::new("H", "Email Aktif Leader", Field::LeaderEmail),
    Column::new("I", "Asal Daerah", Field::Region),
    Column::new("J", "Anggota Tim", Field::TeamMembers),
    Column::new("K", "Logo Tim", Field::TeamLogoUrl),
    Column::new("L", "Pernyataan Persetujuan", Field::ConsentStatement),
];

/// Cells a row needs before it can become a `Participant`.
pub const COLUMN_COUNT: usize = COLUMNS.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Timestamp,
    RegistrationNumber,
    Token,
    EmailAddress,
    TeamName,
    LeaderFullName,
    LeaderWhatsapp,
    LeaderEmail,
    Region,
    TeamMembers,
    TeamLogoUrl,
    ConsentStatement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub letter: &'static str,
    pub label: &'static str,
    pub field: Field,
}

impl Column {
    const fn new(letter: &'static str, label: &'static str, field: Field) -> Self {
        Self {
            letter,
            label,
            field,
        }
    }

    pub fn is_logo(&self) -> bool {
        self.field == Field::TeamLogoUrl
    }

    /// Extra `<td>` class for the template.
    pub fn css_class(&self) -> &'static str {
        match self.field {
            Field::TeamMembers => "members",
            Field::TeamLogoUrl => "logo",
            _ => "",
        }
    }
}

/// One registration row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Participant {
    pub timestamp: String,
    pub registration_number: String,
    pub token: String,
    pub email_address: String,
    pub team_name: String,
    pub leader_full_name: String,
    pub leader_whatsapp: String,
    pub leader_email: String,
    pub region: String,
    pub team_members: String,
    pub team_logo_url: String,
    pub consent_statement: String,
}

impl Participant {
    /// Binds already-stringified cells through `COLUMNS`. Returns `None` when
    /// the row is short; cells past column L are ignored.
    pub fn from_cells(cells: Vec<String>) -> Option<Self> {
        if cells.len() < COLUMN_COUNT {
            return None;
        }
        let mut participant = Self::default();
        for (column, value) in COLUMNS.iter().zip(cells) {
            *participant.field_mut(column.field) = value;
        }
        Some(participant)
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Timestamp => &self.timestamp,
            Field::RegistrationNumber => &self.registration_number,
            Field::Token => &self.token,
            Field::EmailAddress => &self.email_address,
            Field::TeamName => &self.team_name,
            Field::LeaderFullName => &self.leader_full_name,
            Field::LeaderWhatsapp => &self.leader_whatsapp,
            Field::LeaderEmail => &self.leader_email,
            Field::Region => &self.region,
            Field::TeamMembers => &self.team_members,
            Field::TeamLogoUrl => &self.team_logo_url,
            Field::ConsentStatement => &self.consent_statement,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Timestamp => &mut self.timestamp,
            Field::RegistrationNumber => &mut self.registration_number,
            Field::Token => &mut self.token,
            Field::EmailAddress => &mut self.email_address,
            Field::TeamName => &mut self.team_name,
            Field::LeaderFullName => &mut self.leader_full_name,
            Field::LeaderWhatsapp => &mut self.leader_whatsapp,
            Field::LeaderEmail => &mut self.leader_email,
            Field::Region => &mut self.region,
            Field::TeamMembers => &mut self.team_members,
            Field::TeamLogoUrl => &mut self.team_logo_url,
            Field::ConsentStatement => &mut self.consent_statement,
        }
    }

    /// Field values in sheet column order.
    pub fn cells(&self) -> [&str; COLUMN_COUNT] {
        COLUMNS.map(|column| self.get(column.field))
    }

    /// `cells` paired with their column, for the table body.
    pub fn labelled_cells(&self) -> [(Column, &str); COLUMN_COUNT] {
        COLUMNS.map(|column| (column, self.get(column.field)))
    }

    pub fn has_logo(&self) -> bool {
        let url = self.team_logo_url.trim();
        url.starts_with("http://") || url.starts_with("https://")
    }
}

/// Everything the page template receives.
#[derive(Debug, Clone, Default)]
pub struct PageData {
    pub participants: Vec<Participant>,
}
