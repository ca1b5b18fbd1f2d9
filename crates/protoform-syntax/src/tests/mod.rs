//! Unit and behavioural tests for protocol extraction.


/// Looks up a named sample source shared by the unit and behaviour suites.
pub(crate) fn sample(name: &str) -> &'static str {
    match name {
        "plain_class" => "class Foo {\n    func bar() -> Int {\n        return 1\n    }\n}",
        "conforming_class" => "class Bar: Baz {\n    func run() {\n    }\n}",
        "struct_only" => "struct Point {\n    func length() -> Double {\n        0\n    }\n}\n",
        "view_controller" => concat!(
            "import UIKit\n",
            "\n",
            "final class ListViewController: UIViewController, UITableViewDelegate {\n",
            "    private let items: [String] = []\n",
            "\n",
            "    func reload(animated: Bool) {\n",
            "        tableView.reloadData()\n",
            "    }\n",
            "\n",
            "    func item(at index: Int) -> String {\n",
            "        items[index]\n",
            "    }\n",
            "}\n",
        ),
        other => panic!("unknown sample source: {other}"),
    }
}
