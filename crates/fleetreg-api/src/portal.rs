use std::str::FromStr;

/// The sub-application a client instance serves.
///
/// The suite ships four role-scoped consoles on top of one registry
/// service. The portal determines the auth path prefix and the role a
/// synthetic login embeds in its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Portal {
    /// Main administration console.
    #[default]
    Admin,
    /// Police violation-capture console.
    Police,
    /// DVLA vehicle-registry console.
    Dvla,
    /// Supervisor review console.
    Supervisor,
}

impl Portal {
    /// The path prefix under which this portal's auth endpoints live.
    ///
    /// The main console authenticates at the service root; the other
    /// consoles are mounted under their own prefix.
    pub fn auth_prefix(&self) -> &'static str {
        match self {
            Self::Admin => "",
            Self::Police => "/police",
            Self::Dvla => "/dvla",
            Self::Supervisor => "/supervisor",
        }
    }

    /// The login endpoint path for this portal.
    pub fn login_path(&self) -> String {
        format!("{}/auth/login", self.auth_prefix())
    }

    /// The logout endpoint path for this portal.
    pub fn logout_path(&self) -> String {
        format!("{}/auth/logout", self.auth_prefix())
    }

    /// The registration endpoint path for this portal.
    pub fn register_path(&self) -> String {
        format!("{}/auth/register", self.auth_prefix())
    }

    /// The role string a synthetic login response carries for this portal.
    pub fn role(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Police => "officer",
            Self::Dvla => "dvla_officer",
            Self::Supervisor => "supervisor",
        }
    }

    /// Infer the portal from an endpoint path's prefix.
    ///
    /// Paths not under a known prefix belong to the main console.
    pub fn from_path(path: &str) -> Self {
        if path.starts_with("/police/") {
            Self::Police
        } else if path.starts_with("/dvla/") {
            Self::Dvla
        } else if path.starts_with("/supervisor/") {
            Self::Supervisor
        } else {
            Self::Admin
        }
    }

    /// Canonical configuration name for this portal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Police => "police",
            Self::Dvla => "dvla",
            Self::Supervisor => "supervisor",
        }
    }
}

impl FromStr for Portal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" | "main" => Ok(Self::Admin),
            "police" => Ok(Self::Police),
            "dvla" => Ok(Self::Dvla),
            "supervisor" => Ok(Self::Supervisor),
            other => Err(format!(
                "expected 'admin', 'police', 'dvla', or 'supervisor', got '{other}'"
            )),
        }
    }
}
