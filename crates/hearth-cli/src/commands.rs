use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Create the first administrator account. Refused once any admin
    /// exists; this is the only path that bypasses invite codes.
    Bootstrap {
        #[arg(long)]
        handle: String,
        #[arg(long)]
        contact: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        display_name: Option<String>,
    },

    /// Promote an existing account to administrator
    Promote {
        /// Acting administrator's handle
        #[arg(long)]
        actor: String,
        /// Handle of the account to promote
        target: String,
    },

    /// Issue a new single-use invite code
    Issue {
        /// Issuing administrator's handle
        #[arg(long)]
        issuer: String,
        /// Bind the code to a contact address and attempt delivery
        #[arg(long)]
        contact: Option<String>,
    },

    /// List invite codes issued by an administrator
    Invites {
        /// Issuing administrator's handle
        #[arg(long)]
        issuer: String,
    },

    /// Redeem an invite code, creating a member account
    Register {
        #[arg(long)]
        code: String,
        #[arg(long)]
        handle: String,
        #[arg(long)]
        contact: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        display_name: Option<String>,
    },

    /// List all accounts
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Change an account's handle
    Rename {
        /// Current handle
        current: String,
        /// New handle
        new: String,
    },
}
