mod report_full_status;
