use crate::parser::acl_item::AclItem;
use crate::privileges::object_type::ObjectType;
use crate::privileges::version::supports_grant_options;
use crate::privileges::vocabulary::rules_for;

/// A list of privileges as written after `GRANT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrivilegeList {
    /// Every privilege the object type has.
    All,
    /// Explicit keywords in vocabulary order; possibly empty.
    Keywords(Vec<&'static str>),
}

impl PrivilegeList {
    /// The empty list.
    pub fn none() -> Self {
        PrivilegeList::Keywords(Vec::new())
    }

    /// True when nothing would be granted.
    pub fn is_empty(&self) -> bool {
        matches!(self, PrivilegeList::Keywords(keywords) if keywords.is_empty())
    }

    /// Render the list, qualifying every entry with the column when given:
    /// `SELECT(c),UPDATE(c)` or `ALL(c)`.
    pub fn render(&self, subname: Option<&str>) -> String {
        let qualify = |keyword: &str| match subname {
            Some(column) => format!("{keyword}({column})"),
            None => keyword.to_string(),
        };
        match self {
            PrivilegeList::All => qualify("ALL"),
            PrivilegeList::Keywords(keywords) => keywords
                .iter()
                .map(|keyword| qualify(*keyword))
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

/// The privileges of one ACL item, split by grant option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantSet {
    /// Privileges granted without grant option.
    pub privileges: PrivilegeList,
    /// Privileges granted WITH GRANT OPTION.
    pub grantable: PrivilegeList,
}

impl GrantSet {
    /// True when the item maps to no known privilege at all.
    pub fn is_empty(&self) -> bool {
        self.privileges.is_empty() && self.grantable.is_empty()
    }

    /// Whether this is what an owner holds implicitly on a fresh object:
    /// `ALL WITH GRANT OPTION`, or plain `ALL` before grant options existed.
    /// Column grants never match, owners hold no column-level privileges.
    pub fn is_owner_default(&self, server_version: u32, subname: Option<&str>) -> bool {
        if subname.is_some() {
            return false;
        }
        if supports_grant_options(server_version) {
            self.grantable == PrivilegeList::All
        } else {
            self.privileges == PrivilegeList::All
        }
    }
}

/// Translate the codes of `item` into GRANT keyword lists.
///
/// Only codes known for `object_type` at `server_version` contribute. When
/// every known code is present and all carry the same grant-option flag,
/// the list collapses to `ALL`. Before grant options existed a `*` is
/// treated as a plain privilege.
pub fn map_privileges(
    item: &AclItem,
    object_type: ObjectType,
    server_version: u32,
    subname: Option<&str>,
) -> GrantSet {
    let honor_grant_option = supports_grant_options(server_version);
    let mut privileges = Vec::new();
    let mut grantable = Vec::new();
    let mut all_with_option = true;
    let mut all_without_option = true;

    for rule in rules_for(object_type, server_version, subname.is_some()) {
        match item.privilege(rule.code) {
            Some(code) if code.grantable && honor_grant_option => {
                grantable.push(rule.keyword);
                all_without_option = false;
            }
            Some(_) => {
                privileges.push(rule.keyword);
                all_with_option = false;
            }
            None => {
                all_with_option = false;
                all_without_option = false;
            }
        }
    }

    if all_with_option {
        GrantSet {
            privileges: PrivilegeList::none(),
            grantable: PrivilegeList::All,
        }
    } else if all_without_option {
        GrantSet {
            privileges: PrivilegeList::All,
            grantable: PrivilegeList::none(),
        }
    } else {
        GrantSet {
            privileges: PrivilegeList::Keywords(privileges),
            grantable: PrivilegeList::Keywords(grantable),
        }
    }
}
