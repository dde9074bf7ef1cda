//! Test fixture generators

/// Generate a minimal valid Python function
pub fn fixture_simple_function(name: &str) -> String {
    format!("def {name}(): pass")
}

/// Generate a Python file with N functions
pub fn fixture_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| format!("def func_{i}(): pass\n"))
        .collect()
}

/// Generate a Python class with methods
pub fn fixture_simple_class(class_name: &str, method_count: usize) -> String {
    let methods: String = (0..method_count)
        .map(|i| format!("    def method_{i}(self): pass\n"))
        .collect();

    format!("class {class_name}:\n{methods}")
}

/// One small, valid program per bundled language and JSX dialect, with its root node type
pub fn fixture_per_language() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("main.py", "import os\n\ndef main():\n    return os.getcwd()\n", "module"),
        ("Main.java", "class Main {\n  void run() {}\n}\n", "program"),
        ("main.ts", "export function main(): void {}\n", "program"),
        ("main.js", "function main() { return 1; }\n", "program"),
        ("Main.kt", "fun main() {\n    println(\"hi\")\n}\n", "source_file"),
        ("main.rs", "fn main() {\n    let x = 1;\n}\n", "source_file"),
        ("main.go", "package main\n\nfunc main() {}\n", "source_file"),
        (
            "App.tsx",
            "export const App = (props: { name: string }) => <h1>{props.name}</h1>;\n",
            "program",
        ),
        ("App.jsx", "export default function App() {\n  return <div>hi</div>;\n}\n", "program"),
    ]
}
