use crate::error::{AclError, ItemFailure};
use crate::parser::names::scan_role_name;

/// Prefix the server puts in front of group grantees in legacy ACLs.
pub const GROUP_PREFIX: &str = "group ";

/// One privilege code of an ACL item, e.g. `r` or `a*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivilegeCode {
    /// Single-character code, e.g. `r` for SELECT.
    pub code: char,
    /// Set when the code is followed by `*`.
    pub grantable: bool,
}

/// Who receives the privileges of an ACL item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grantee<'a> {
    /// The implicit `PUBLIC` pseudo-role (empty grantee).
    Public,
    /// A legacy group, grantee text `group <name>`.
    Group(&'a str),
    /// An ordinary role.
    Role(&'a str),
}

/// A parsed `grantee=codes/grantor` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AclItem {
    /// Raw grantee; empty means `PUBLIC`.
    pub grantee: String,
    /// Grantor when listed. `None` means "the object owner".
    pub grantor: Option<String>,
    /// Codes in order of first appearance, one entry per code.
    pub privileges: Vec<PrivilegeCode>,
}

impl AclItem {
    /// Classify the grantee.
    pub fn grantee(&self) -> Grantee<'_> {
        if self.grantee.is_empty() {
            Grantee::Public
        } else if let Some(group) = self.grantee.strip_prefix(GROUP_PREFIX) {
            Grantee::Group(group)
        } else {
            Grantee::Role(&self.grantee)
        }
    }

    /// Look up a privilege code.
    pub fn privilege(&self, code: char) -> Option<PrivilegeCode> {
        self.privileges.iter().copied().find(|p| p.code == code)
    }
}

/// Parse one ACL item as produced by `aclitemout`.
pub fn parse_acl_item(item: &str) -> Result<AclItem, AclError> {
    let fail = |reason| AclError::ItemSyntax {
        item: item.to_string(),
        reason,
    };

    let grantee = scan_role_name(item).map_err(fail)?;
    let Some(rest) = item[grantee.end..].strip_prefix('=') else {
        return Err(fail(ItemFailure::MissingEquals));
    };

    let (codes, grantor) = match rest.split_once('/') {
        Some((codes, grantor_text)) => {
            let grantor = scan_role_name(grantor_text).map_err(fail)?;
            if grantor.end != grantor_text.len() {
                return Err(fail(ItemFailure::TrailingGrantorCharacters));
            }
            (codes, Some(grantor.name).filter(|name| !name.is_empty()))
        }
        None => (rest, None),
    };

    Ok(AclItem {
        grantee: grantee.name,
        grantor,
        privileges: parse_privilege_codes(codes),
    })
}

fn parse_privilege_codes(codes: &str) -> Vec<PrivilegeCode> {
    let chars: Vec<char> = codes.chars().collect();
    let mut privileges: Vec<PrivilegeCode> = Vec::with_capacity(chars.len());

    for (idx, &code) in chars.iter().enumerate() {
        if code == '*' || privileges.iter().any(|p| p.code == code) {
            continue;
        }
        privileges.push(PrivilegeCode {
            code,
            grantable: chars.get(idx + 1) == Some(&'*'),
        });
    }

    privileges
}
