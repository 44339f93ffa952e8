use crate::models::{remove_cv_ref, Problem, Signature};
use crate::project::ProjectFile;

use super::{indent, Code, CodeGen, INSTANCE};

pub struct CppCodeGen;

const TEMPLATE: &str = r#"
#include "_boilerplate.hpp"

// BEGIN SUBMIT

// BEGIN USER TEMPLATE

// END USER TEMPLATE

// BEGIN SOLUTION CLASS

// END SOLUTION CLASS

// END SUBMIT

// BEGIN STATEMENT

// END STATEMENT

// BEGIN TEST

// END TEST
"#;

const USER_TEMPLATE: &str = r#"
#ifndef LEETCODE_LOCAL
# define print(...)
# define PRINT(...)
# define debug(...)
#endif  // LEETCODE_LOCAL

typedef long long ll;
typedef unsigned int uint;

template <class T>
struct _greater : less<T> {
    inline bool operator() (const T& x, const T& y) const {
        return less<T>::operator()(y, x);
    }
};
template <class T>
using min_heap = priority_queue<T, vector<T>, _greater<T>>;
template <class T>
using max_heap = priority_queue<T, vector<T>, less<T>>;

inline double runtime() {
    return (double)clock() / CLOCKS_PER_SEC;
}

#define tget(a, b) get<b>(a)
"#;

const TESTING_H: &str = r#"#ifndef TESTING_H
#define TESTING_H

#include <iostream>
#include <string>
#include <vector>

template <typename T>
void print(const T &x) { std::cout << x; }

template <typename T>
void print(const std::vector<T> &vec) {
    for (size_t i = 0; i < vec.size(); ++i) {
        std::cout << (i == 0 ? "{" : ", ");
        print(vec[i]);
    }
    std::cout << (vec.empty() ? "{}" : "}");
}

template <>
void print(const bool &x) { std::cout << (x ? "true" : "false"); }

template <typename T>
inline bool _test(const T &a, const T &b) {
    return a == b;
}

template <typename T>
inline bool _test(const std::vector<T> &a, const std::vector<T> &b) {
    if (a.size() != b.size()) return false;
    for (size_t i = 0; i < a.size(); ++i)
        if (!_test(a[i], b[i])) return false;
    return true;
}

template <typename T>
inline void test(const char *msg, const T &a, const T &b) {
    if (_test(a, b)) {
        std::cout << msg << " [OK]" << std::endl;
    } else {
        std::cout << msg << " [WRONG]" << std::endl;
        std::cout << "Expected: ";
        print(a);
        std::cout << std::endl << "Received: ";
        print(b);
        std::cout << std::endl;
    }
}

#endif  // TESTING_H
"#;

const BOILERPLATE_HPP: &str = r#"#include <algorithm>
#include <bitset>
#include <climits>
#include <cmath>
#include <complex>
#include <cstdarg>
#include <cstdio>
#include <cstdlib>
#include <cstring>
#include <ctime>
#include <fstream>
#include <functional>
#include <iomanip>
#include <ios>
#include <iostream>
#include <map>
#include <numeric>
#include <queue>
#include <random>
#include <set>
#include <stack>
#include <string>
#include <tuple>
#include <unordered_map>
#include <unordered_set>
#include <utility>
#include <vector>

#include "_testing.h"

using namespace std;

struct TreeNode {
    int val;
    TreeNode *left;
    TreeNode *right;
    TreeNode(int x) : val(x), left(NULL), right(NULL) {}
    ~TreeNode() {
        if (left != NULL) delete left;
        if (right != NULL) delete right;
    }
};

const int NONE = INT_MIN;

// Build a tree from its level-order array, NONE marking absent nodes.
TreeNode *_construct_tree(const vector<int> &parent) {
    queue<TreeNode *> q;
    size_t ptr = 0;

    auto _add_node = [&]() -> TreeNode * {
        if (ptr >= parent.size()) return nullptr;
        int val = parent[ptr++];
        if (val == NONE) return nullptr;
        auto *p = new TreeNode(val);
        q.push(p);
        return p;
    };

    TreeNode *root = _add_node();
    while (!q.empty()) {
        if (ptr >= parent.size()) break;
        TreeNode *p = q.front();
        q.pop();
        p->left = _add_node();
        p->right = _add_node();
    }
    return root;
}

#ifdef LEETCODE_LOCAL
template <typename T>
void print(T *a, int n) {
    for (int i = 1; i < n; ++i)
        std::cout << a[i] << " ";
    std::cout << a[n] << std::endl;
}

#define PRINT(__l, __r, __s, __t) {                     \
    std::cout << #__l #__s << "~" << #__t #__r << ": "; \
    for (auto __i = __s; __i != __t; ++__i)             \
        std::cout << __l __i __r << " ";                \
    std::cout << std::endl;                             \
}

template <typename ...Args>
void debug(Args ...args);

template <>
void debug() { std::cout << std::endl; }

template <typename T, typename ...Args>
void debug(const T &x, Args ...args) {
    print(x);
    std::cout << " ";
    debug(args...);
}
#endif  // LEETCODE_LOCAL
"#;

impl CodeGen for CppCodeGen {
    fn language(&self) -> &'static str {
        "C++"
    }

    fn extension(&self) -> &'static str {
        "cpp"
    }

    fn line_comment(&self) -> &'static str {
        "//"
    }

    fn template_code(&self) -> &'static str {
        TEMPLATE
    }

    fn user_template_code(&self) -> &'static str {
        USER_TEMPLATE
    }

    fn extra_files(&self) -> Vec<ProjectFile> {
        vec![
            ProjectFile::new("_testing.h", TESTING_H),
            ProjectFile::new("_boilerplate.hpp", BOILERPLATE_HPP),
        ]
    }

    fn build_descriptor(&self, file_names: &[String]) -> Option<ProjectFile> {
        let mut cmake = vec![
            "cmake_minimum_required(VERSION 3.12)".to_string(),
            "project(leetcode)".to_string(),
            "set(CMAKE_CXX_STANDARD 17)".to_string(),
            r#"set(CMAKE_CXX_FLAGS "${CMAKE_CXX_FLAGS} -DLEETCODE_LOCAL")"#.to_string(),
        ];
        for file_name in file_names {
            let target = file_name
                .strip_suffix(".cpp")
                .unwrap_or(file_name.as_str());
            cmake.push(format!("add_executable({} {})", target, file_name));
        }

        let mut contents = cmake.join("\n");
        contents.push('\n');
        Some(ProjectFile::new("CMakeLists.txt", contents))
    }

    /// The crawled template is already C++.
    fn solution_code(&self, problem: &Problem, _signature: &Signature) -> Code {
        problem.code.clone()
    }

    fn list_literal(&self, items: Vec<String>) -> String {
        format!("{{{}}}", items.join(", "))
    }

    fn map_literal(&self, entries: Vec<(String, String)>) -> String {
        let entries: Vec<String> = entries
            .into_iter()
            .map(|(k, v)| format!("{{{}, {}}}", k, v))
            .collect();
        format!("{{{}}}", entries.join(", "))
    }

    fn char_literal(&self, s: &str) -> String {
        if s.chars().count() != 1 {
            return self.string_literal(s);
        }
        let escaped: String = s
            .chars()
            .map(|c| match c {
                '\'' => "\\'".to_string(),
                '\\' => "\\\\".to_string(),
                c => c.to_string(),
            })
            .collect();
        format!("'{}'", escaped)
    }

    fn bool_literal(&self, b: bool) -> String {
        b.to_string()
    }

    fn null_literal(&self) -> &'static str {
        "nullptr"
    }

    fn absent_node(&self) -> &'static str {
        "NONE"
    }

    fn tree_literal(&self, nodes: Vec<String>) -> String {
        format!("_construct_tree({})", self.list_literal(nodes))
    }

    fn declare_assign(&self, ty: &str, name: &str, value: &str) -> String {
        format!("{} {} = {};", remove_cv_ref(ty), name, value)
    }

    fn declare(&self, ty: &str, names: &[String]) -> Option<String> {
        Some(format!("{} {};", remove_cv_ref(ty), names.join(", ")))
    }

    fn assign(&self, name: &str, value: &str) -> String {
        format!("{} = {};", name, value)
    }

    fn construct(&self, class_name: &str, instance: &str, args: &[String]) -> String {
        // `Class obj();` would declare a function.
        if args.is_empty() {
            format!("{} {};", class_name, instance)
        } else {
            format!("{} {}({});", class_name, instance, args.join(", "))
        }
    }

    fn statement(&self, expr: String) -> String {
        format!("{};", expr)
    }

    fn report_function(&self) -> &'static str {
        "test"
    }

    fn test_function_name(&self, idx: usize) -> String {
        format!("test_example_{}", idx)
    }

    fn test_function(&self, name: &str, solution_class: Option<&str>, body: Code) -> Code {
        let params = solution_class
            .map(|class| format!("{} &{}", class, INSTANCE))
            .unwrap_or_default();
        let mut code = vec![format!("void {}({}) {{", name, params)];
        code.extend(indent(body));
        code.push("}".to_string());
        code
    }

    fn driver(&self, test_names: &[String], solution_class: Option<&str>) -> Code {
        let mut body = Vec::new();
        let arg = match solution_class {
            Some(class) => {
                body.push(format!("{} {};", class, INSTANCE));
                INSTANCE
            }
            None => "",
        };
        body.extend(test_names.iter().map(|name| format!("{}({});", name, arg)));

        let mut code = vec!["int main() {".to_string()];
        code.extend(indent(body));
        code.push("}".to_string());
        code
    }
}
