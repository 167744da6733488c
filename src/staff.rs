use std::fmt;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Employee identifier derived from name and salary. FNV-1a is spelled out
/// here because the identifier must be identical across process restarts,
/// which rules out the seeded std hashers.
fn derive_eid(name: &str, salary: u32) -> u64 {
    let salary = salary.to_string();
    let mut hash = FNV_OFFSET;
    for byte in name.bytes().chain(salary.bytes()) {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Closed set of staff positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Doctor,
    Receptionist,
}

impl Role {
    /// Position label as persisted in the roster file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Doctor => "Doctor",
            Role::Receptionist => "Receptionist",
        }
    }

    pub fn parse(input: &str) -> Option<Role> {
        match input.trim().to_ascii_lowercase().as_str() {
            "doctor" => Some(Role::Doctor),
            "receptionist" => Some(Role::Receptionist),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Salaried staff have no hours counter; hourly staff accrue hours toward
/// payroll, which is computed elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compensation {
    Salaried,
    Hourly { hours_accrued: u32 },
}

impl Compensation {
    pub fn is_hourly(&self) -> bool {
        matches!(self, Compensation::Hourly { .. })
    }

    pub fn hours_accrued(&self) -> Option<u32> {
        match self {
            Compensation::Salaried => None,
            Compensation::Hourly { hours_accrued } => Some(*hours_accrued),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    eid: u64,
    pub name: String,
    pub role: Role,
    pub salary: u32,
    pub compensation: Compensation,
}

impl Employee {
    pub fn new(role: Role, name: impl Into<String>, salary: u32, compensation: Compensation) -> Self {
        let name = name.into();
        let eid = derive_eid(&name, salary);
        Self {
            eid,
            name,
            role,
            salary,
            compensation,
        }
    }

    /// A doctor on salary, the default arrangement.
    pub fn doctor(name: impl Into<String>, salary: u32) -> Self {
        Self::new(Role::Doctor, name, salary, Compensation::Salaried)
    }

    /// A receptionist paid hourly, starting with an empty timecard.
    pub fn receptionist(name: impl Into<String>, salary: u32) -> Self {
        Self::new(
            Role::Receptionist,
            name,
            salary,
            Compensation::Hourly { hours_accrued: 0 },
        )
    }

    pub fn eid(&self) -> u64 {
        self.eid
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// An employee with the same derived identifier is already registered.
    DuplicateIdentity { eid: u64 },
    NoSuchEmployee { name: String },
    /// Hours can only accrue against hourly compensation.
    NotHourly { name: String },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateIdentity { eid } => {
                write!(f, "employee id {eid} already exists")
            }
            RegistryError::NoSuchEmployee { name } => {
                write!(f, "no employee named '{name}'")
            }
            RegistryError::NotHourly { name } => {
                write!(f, "{name} is salaried and does not accrue hours")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// The employee roster, in registration order. Identifiers are unique
/// within the roster; names are not guaranteed to be.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaffRegistry {
    employees: Vec<Employee>,
}

impl StaffRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an employee, rejecting identifier collisions. The roster is
    /// unchanged on rejection.
    pub fn register(&mut self, employee: Employee) -> Result<(), RegistryError> {
        if self.employees.iter().any(|e| e.eid == employee.eid) {
            return Err(RegistryError::DuplicateIdentity { eid: employee.eid });
        }
        self.employees.push(employee);
        Ok(())
    }

    /// Case-insensitive exact-name lookup; first match in registration
    /// order wins when names repeat.
    pub fn find_by_name(&self, name: &str) -> Option<&Employee> {
        self.employees
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Add hours to an hourly employee's timecard and return the new
    /// total. Salaried employees are an error, not a no-op.
    pub fn accrue_hours(&mut self, name: &str, delta: u32) -> Result<u32, RegistryError> {
        let employee = self
            .employees
            .iter_mut()
            .find(|e| e.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| RegistryError::NoSuchEmployee {
                name: name.trim().to_string(),
            })?;
        match &mut employee.compensation {
            Compensation::Salaried => Err(RegistryError::NotHourly {
                name: employee.name.clone(),
            }),
            Compensation::Hourly { hours_accrued } => {
                *hours_accrued += delta;
                Ok(*hours_accrued)
            }
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// One line per employee, tagged by role.
    pub fn summary(&self) -> String {
        self.employees
            .iter()
            .map(|e| {
                let tag = match e.role {
                    Role::Doctor => "[D]",
                    Role::Receptionist => "[R]",
                };
                format!("{tag} {}", e.name)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
