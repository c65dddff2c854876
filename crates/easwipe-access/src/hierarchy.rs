//! Department hierarchy resolution.
//!
//! Departments form a forest through `parent_id`. The resolver walks child
//! edges downward from a root. Every traversal keeps a visited set, so a
//! malformed table containing a cycle yields a truncated result instead of
//! looping. Edits are checked with [`check_parent_assignment`] and
//! [`ensure_deletable`] so the stored table never gains a cycle or a dangling
//! parent in the first place.

use std::collections::{HashMap, HashSet};

use easwipe_models::{Department, DepartmentId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    #[error("Parent department {parent} does not exist")]
    UnknownParent {
        department: DepartmentId,
        parent: DepartmentId,
    },

    #[error("Department {department} cannot be its own parent")]
    SelfParent { department: DepartmentId },

    #[error("Making {parent} the parent of {department} would create a cycle")]
    Cycle {
        department: DepartmentId,
        parent: DepartmentId,
    },

    #[error("Department {department} still has {children} child department(s)")]
    HasChildren {
        department: DepartmentId,
        children: usize,
    },
}

/// An indexed view over one department snapshot.
///
/// Build it once per request when several decisions need the tree.
#[derive(Debug)]
pub struct DepartmentTree<'a> {
    by_id: HashMap<&'a DepartmentId, &'a Department>,
    children: HashMap<&'a DepartmentId, Vec<&'a DepartmentId>>,
}

impl<'a> DepartmentTree<'a> {
    pub fn new(departments: &'a [Department]) -> Self {
        let mut by_id = HashMap::with_capacity(departments.len());
        let mut children: HashMap<&DepartmentId, Vec<&DepartmentId>> = HashMap::new();

        for department in departments {
            by_id.insert(&department.id, department);
            if let Some(parent) = &department.parent_id {
                children.entry(parent).or_default().push(&department.id);
            }
        }

        Self { by_id, children }
    }

    pub fn contains(&self, id: &DepartmentId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn get(&self, id: &DepartmentId) -> Option<&'a Department> {
        self.by_id.get(id).copied()
    }

    /// Direct children of `id`, in table order.
    pub fn children_of(&self, id: &DepartmentId) -> impl Iterator<Item = &'a DepartmentId> + '_ {
        self.children.get(id).into_iter().flatten().copied()
    }

    /// `root` plus every department below it.
    ///
    /// A root with no department record resolves to `{root}`.
    pub fn closure(&self, root: &DepartmentId) -> HashSet<DepartmentId> {
        let mut visited: HashSet<&DepartmentId> = HashSet::new();
        let mut stack = vec![root];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            stack.extend(self.children_of(current).filter(|child| !visited.contains(*child)));
        }

        visited.into_iter().cloned().collect()
    }

    /// Parent chain of `id`, nearest first. A dangling parent id is included
    /// and ends the chain. Stops at the first repeated id.
    pub fn ancestors(&self, id: &DepartmentId) -> Vec<DepartmentId> {
        let mut seen: HashSet<&DepartmentId> = HashSet::new();
        let mut chain = Vec::new();
        let mut current = self.get(id).and_then(|d| d.parent_id.as_ref());

        while let Some(parent) = current {
            if !seen.insert(parent) {
                break;
            }
            chain.push(parent.clone());
            current = self.get(parent).and_then(|d| d.parent_id.as_ref());
        }

        chain
    }
}

/// The set of department ids reachable from `root` by following child edges,
/// including `root` itself.
pub fn resolve_department_closure(
    root: &DepartmentId,
    departments: &[Department],
) -> HashSet<DepartmentId> {
    DepartmentTree::new(departments).closure(root)
}

/// Validates giving department `id` the parent `new_parent`.
///
/// `id` need not exist yet, so the same check covers creation.
pub fn check_parent_assignment(
    id: &DepartmentId,
    new_parent: Option<&DepartmentId>,
    departments: &[Department],
) -> Result<(), HierarchyError> {
    let Some(parent) = new_parent else {
        return Ok(());
    };

    if parent == id {
        return Err(HierarchyError::SelfParent {
            department: id.clone(),
        });
    }

    let tree = DepartmentTree::new(departments);
    if !tree.contains(parent) {
        return Err(HierarchyError::UnknownParent {
            department: id.clone(),
            parent: parent.clone(),
        });
    }

    if tree.closure(id).contains(parent) {
        return Err(HierarchyError::Cycle {
            department: id.clone(),
            parent: parent.clone(),
        });
    }

    Ok(())
}

pub fn dependent_children(id: &DepartmentId, departments: &[Department]) -> Vec<DepartmentId> {
    departments
        .iter()
        .filter(|d| d.parent_id.as_ref() == Some(id))
        .map(|d| d.id.clone())
        .collect()
}

/// Refuses to delete a department other departments still hang off.
pub fn ensure_deletable(id: &DepartmentId, departments: &[Department]) -> Result<(), HierarchyError> {
    let children = dependent_children(id, departments).len();
    if children > 0 {
        return Err(HierarchyError::HasChildren {
            department: id.clone(),
            children,
        });
    }
    Ok(())
}

/// Reports every dangling parent and every department that sits on a cycle.
pub fn audit_departments(departments: &[Department]) -> Vec<HierarchyError> {
    let tree = DepartmentTree::new(departments);
    let mut issues = Vec::new();

    for department in departments {
        let Some(parent) = &department.parent_id else {
            continue;
        };

        if parent == &department.id {
            issues.push(HierarchyError::SelfParent {
                department: department.id.clone(),
            });
        } else if !tree.contains(parent) {
            issues.push(HierarchyError::UnknownParent {
                department: department.id.clone(),
                parent: parent.clone(),
            });
        } else if tree.ancestors(&department.id).contains(&department.id) {
            issues.push(HierarchyError::Cycle {
                department: department.id.clone(),
                parent: parent.clone(),
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> HashSet<DepartmentId> {
        values.iter().map(|v| DepartmentId::from(*v)).collect()
    }

    fn sample_forest() -> Vec<Department> {
        vec![
            Department::new("d1", "Primary"),
            Department::new("d1a", "Block A").with_parent("d1"),
            Department::new("d1a1", "Block A Lab").with_parent("d1a"),
            Department::new("d2", "Secondary"),
        ]
    }

    #[test]
    fn test_closure_includes_all_descendants() {
        let depts = sample_forest();
        assert_eq!(
            resolve_department_closure(&"d1".into(), &depts),
            ids(&["d1", "d1a", "d1a1"])
        );
    }

    #[test]
    fn test_closure_of_leaf_is_itself() {
        let depts = sample_forest();
        assert_eq!(resolve_department_closure(&"d2".into(), &depts), ids(&["d2"]));
        assert_eq!(
            resolve_department_closure(&"d1a1".into(), &depts),
            ids(&["d1a1"])
        );
    }

    #[test]
    fn test_closure_of_unknown_root_is_itself() {
        let depts = sample_forest();
        assert_eq!(
            resolve_department_closure(&"ghost".into(), &depts),
            ids(&["ghost"])
        );
        assert_eq!(resolve_department_closure(&"ghost".into(), &[]), ids(&["ghost"]));
    }

    #[test]
    fn test_closure_of_middle_node_excludes_ancestors_and_siblings() {
        let mut depts = sample_forest();
        depts.push(Department::new("d1b", "Block B").with_parent("d1"));
        assert_eq!(
            resolve_department_closure(&"d1a".into(), &depts),
            ids(&["d1a", "d1a1"])
        );
    }

    #[test]
    fn test_closure_terminates_on_cycle() {
        let depts = vec![
            Department::new("x", "X").with_parent("z"),
            Department::new("y", "Y").with_parent("x"),
            Department::new("z", "Z").with_parent("y"),
        ];
        assert_eq!(
            resolve_department_closure(&"x".into(), &depts),
            ids(&["x", "y", "z"])
        );
    }

    #[test]
    fn test_closure_terminates_on_self_loop() {
        let depts = vec![Department::new("x", "X").with_parent("x")];
        assert_eq!(resolve_department_closure(&"x".into(), &depts), ids(&["x"]));
    }

    #[test]
    fn test_dangling_parent_is_a_leaf() {
        let depts = vec![Department::new("orphan", "Orphan").with_parent("missing")];
        assert_eq!(
            resolve_department_closure(&"orphan".into(), &depts),
            ids(&["orphan"])
        );
        // The missing id still resolves through the child edge.
        assert_eq!(
            resolve_department_closure(&"missing".into(), &depts),
            ids(&["missing", "orphan"])
        );
    }

    #[test]
    fn test_closure_on_wide_deep_tree() {
        let mut depts = vec![Department::new("root", "Root")];
        for i in 0..200 {
            let parent = if i == 0 {
                "root".to_string()
            } else {
                format!("n{}", i - 1)
            };
            depts.push(Department::new(format!("n{i}"), format!("Node {i}")).with_parent(parent));
            depts.push(Department::new(format!("leaf{i}"), "Leaf").with_parent(format!("n{i}")));
        }
        assert_eq!(resolve_department_closure(&"root".into(), &depts).len(), 401);
        assert_eq!(resolve_department_closure(&"n199".into(), &depts).len(), 2);
    }

    #[test]
    fn test_tree_children_and_ancestors() {
        let depts = sample_forest();
        let tree = DepartmentTree::new(&depts);
        let children: Vec<_> = tree.children_of(&"d1".into()).cloned().collect();
        assert_eq!(children, vec![DepartmentId::from("d1a")]);
        assert_eq!(tree.children_of(&"d2".into()).count(), 0);
        assert_eq!(
            tree.ancestors(&"d1a1".into()),
            vec![DepartmentId::from("d1a"), DepartmentId::from("d1")]
        );
        assert!(tree.ancestors(&"d1".into()).is_empty());
        assert!(tree.contains(&"d2".into()));
        assert!(!tree.contains(&"d3".into()));
    }

    #[test]
    fn test_parent_assignment_rules() {
        let depts = sample_forest();

        assert!(check_parent_assignment(&"d2".into(), Some(&"d1a1".into()), &depts).is_ok());
        assert!(check_parent_assignment(&"d1a".into(), None, &depts).is_ok());
        assert!(check_parent_assignment(&"new".into(), Some(&"d1".into()), &depts).is_ok());

        assert_eq!(
            check_parent_assignment(&"d1".into(), Some(&"d1".into()), &depts),
            Err(HierarchyError::SelfParent {
                department: "d1".into()
            })
        );
        assert_eq!(
            check_parent_assignment(&"d1".into(), Some(&"nope".into()), &depts),
            Err(HierarchyError::UnknownParent {
                department: "d1".into(),
                parent: "nope".into()
            })
        );
        assert_eq!(
            check_parent_assignment(&"d1".into(), Some(&"d1a1".into()), &depts),
            Err(HierarchyError::Cycle {
                department: "d1".into(),
                parent: "d1a1".into()
            })
        );
    }

    #[test]
    fn test_delete_refused_while_children_remain() {
        let depts = sample_forest();
        assert_eq!(
            ensure_deletable(&"d1".into(), &depts),
            Err(HierarchyError::HasChildren {
                department: "d1".into(),
                children: 1
            })
        );
        assert!(ensure_deletable(&"d1a1".into(), &depts).is_ok());
        assert!(ensure_deletable(&"d2".into(), &depts).is_ok());
    }

    #[test]
    fn test_audit_reports_dangling_and_cycles() {
        let depts = vec![
            Department::new("ok", "Ok"),
            Department::new("child", "Child").with_parent("ok"),
            Department::new("orphan", "Orphan").with_parent("missing"),
            Department::new("a", "A").with_parent("b"),
            Department::new("b", "B").with_parent("a"),
            Department::new("tail", "Tail").with_parent("a"),
        ];
        let issues = audit_departments(&depts);
        assert_eq!(issues.len(), 3);
        assert!(issues.contains(&HierarchyError::UnknownParent {
            department: "orphan".into(),
            parent: "missing".into()
        }));
        assert!(issues.contains(&HierarchyError::Cycle {
            department: "a".into(),
            parent: "b".into()
        }));
        assert!(issues.contains(&HierarchyError::Cycle {
            department: "b".into(),
            parent: "a".into()
        }));
        assert!(audit_departments(&sample_forest()).is_empty());
    }
}
